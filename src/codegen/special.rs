//! Rendering special members: constructors, destructors and the generated
//! assignment operators.

use crate::error::RenderError;
use crate::model::{Class, Constructor, ConstructorKind, Destructor};

use super::types::render_parameter_list;
use super::{INDENT, NOT_IMPLEMENTED, doc_comment};

/// Render a constructor declaration (flush-left; the class renderer indents).
///
/// A `default` constructor mirrors compiler-default behavior: it synthesizes
/// the copy and move constructor declarations alongside its own, all three
/// `= default`.
pub fn render_constructor_declaration(
    constructor: &Constructor,
    class_name: &str,
) -> Result<String, RenderError> {
    let doc = doc_comment(&constructor.description);
    let decl = match constructor.kind() {
        ConstructorKind::Default => format!(
            "{class_name}() = default;\n\
             {class_name}(const {class_name}& other) = default;\n\
             {class_name}({class_name}&& other) = default;\n"
        ),
        ConstructorKind::Copy => format!("{class_name}(const {class_name}& other);\n"),
        ConstructorKind::Move => format!("{class_name}({class_name}&& other);\n"),
        ConstructorKind::Custom => format!(
            "{class_name}({});\n",
            render_parameter_list(constructor.parameters())?
        ),
    };
    Ok(format!("{doc}{decl}"))
}

/// Render a constructor definition.
///
/// A `default` constructor has no out-of-line body. Copy and move
/// constructors default-initialize every member (public, then private, then
/// protected) in an initializer list over an empty body; only custom
/// constructors get the stub body.
pub fn render_constructor_definition(
    constructor: &Constructor,
    class: &Class,
) -> Result<String, RenderError> {
    let name = class.name.as_str();
    match constructor.kind() {
        ConstructorKind::Default => Ok(String::new()),
        ConstructorKind::Copy => Ok(member_init_definition(
            class,
            &format!("{name}::{name}(const {name}& other)"),
        )),
        ConstructorKind::Move => Ok(member_init_definition(
            class,
            &format!("{name}::{name}({name}&& other)"),
        )),
        ConstructorKind::Custom => Ok(format!(
            "{name}::{name}({}) {{\n{INDENT}{NOT_IMPLEMENTED}\n}}\n",
            render_parameter_list(constructor.parameters())?
        )),
    }
}

fn member_init_definition(class: &Class, header: &str) -> String {
    let mut out = String::from(header);
    let mut members = class.members.iter_ordered();
    if let Some(first) = members.next() {
        out.push_str(&format!("\n{INDENT}: {}()", first.name));
        for member in members {
            out.push_str(&format!("\n{INDENT}, {}()", member.name));
        }
    }
    out.push_str(" {\n}\n");
    out
}

/// Render a destructor declaration (flush-left).
pub fn render_destructor_declaration(destructor: &Destructor, class_name: &str) -> String {
    format!("{}~{class_name}();\n", doc_comment(&destructor.description))
}

/// Render a destructor definition: an empty body.
pub fn render_destructor_definition(class_name: &str) -> String {
    format!("{class_name}::~{class_name}() {{\n}}\n")
}

/// Render the flagged assignment-operator declarations (copy before move).
pub fn render_assignment_declarations(class: &Class) -> String {
    let name = class.name.as_str();
    let mut out = String::new();
    if class.copy_assignment {
        out.push_str(&format!("{name}& operator=(const {name}& other);\n"));
    }
    if class.move_assignment {
        out.push_str(&format!("{name}& operator=({name}&& other);\n"));
    }
    out
}

/// Render the flagged assignment-operator definitions.
pub fn render_assignment_definitions(class: &Class) -> Vec<String> {
    let name = class.name.as_str();
    let mut out = Vec::new();
    if class.copy_assignment {
        out.push(format!(
            "{name}& {name}::operator=(const {name}& other) {{\n{INDENT}return *this;\n}}\n"
        ));
    }
    if class.move_assignment {
        out.push(format!(
            "{name}& {name}::operator=({name}&& other) {{\n{INDENT}return *this;\n}}\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Access, Parameter, PrimitiveKind, Type};

    fn ctor(kind: ConstructorKind, params: Vec<Parameter>) -> Constructor {
        Constructor::new(kind, params, String::new()).unwrap()
    }

    #[test]
    fn default_constructor_synthesizes_three_declarations() {
        let decl = render_constructor_declaration(&ctor(ConstructorKind::Default, vec![]), "Hero")
            .unwrap();
        assert_eq!(
            decl,
            "Hero() = default;\nHero(const Hero& other) = default;\nHero(Hero&& other) = default;\n"
        );
        let def =
            render_constructor_definition(&ctor(ConstructorKind::Default, vec![]), &Class::new("Hero"))
                .unwrap();
        assert!(def.is_empty());
    }

    #[test]
    fn copy_constructor_initializes_members_in_section_order() {
        let mut class = Class::new("Hero");
        class
            .members
            .get_mut(Access::Private)
            .push(Parameter::new("hp", Type::primitive(PrimitiveKind::Int)));
        class
            .members
            .get_mut(Access::Public)
            .push(Parameter::new("name", Type::primitive(PrimitiveKind::String)));
        let def = render_constructor_definition(&ctor(ConstructorKind::Copy, vec![]), &class)
            .unwrap();
        assert_eq!(
            def,
            "Hero::Hero(const Hero& other)\n    : name()\n    , hp() {\n}\n"
        );
    }

    #[test]
    fn move_constructor_without_members_has_bare_body() {
        let def = render_constructor_definition(&ctor(ConstructorKind::Move, vec![]), &Class::new("Hero"))
            .unwrap();
        assert_eq!(def, "Hero::Hero(Hero&& other) {\n}\n");
    }

    #[test]
    fn custom_constructor_renders_stub_body() {
        let params = vec![Parameter::new("hp", Type::primitive(PrimitiveKind::Int))];
        let def = render_constructor_definition(&ctor(ConstructorKind::Custom, params), &Class::new("Hero"))
            .unwrap();
        assert_eq!(
            def,
            "Hero::Hero(int hp) {\n    throw std::logic_error(\"not implemented\");\n}\n"
        );
    }

    #[test]
    fn destructor_rendering() {
        let dtor = Destructor {
            description: "tear down".to_owned(),
        };
        assert_eq!(
            render_destructor_declaration(&dtor, "Hero"),
            "/// tear down\n~Hero();\n"
        );
        assert_eq!(render_destructor_definition("Hero"), "Hero::~Hero() {\n}\n");
    }

    #[test]
    fn assignment_operators_follow_flags() {
        let mut class = Class::new("Hero");
        assert!(render_assignment_declarations(&class).is_empty());
        class.copy_assignment = true;
        class.move_assignment = true;
        assert_eq!(
            render_assignment_declarations(&class),
            "Hero& operator=(const Hero& other);\nHero& operator=(Hero&& other);\n"
        );
        let defs = render_assignment_definitions(&class);
        assert_eq!(defs.len(), 2);
        assert!(defs[0].contains("return *this;"));
    }
}
