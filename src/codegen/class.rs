//! Rendering class declarations and definitions.

use crate::error::RenderError;
use crate::model::{Access, Class, Parameter};

use super::callable::{render_method_declaration, render_method_definition};
use super::special::{
    render_assignment_declarations, render_assignment_definitions,
    render_constructor_declaration, render_constructor_definition,
    render_destructor_declaration, render_destructor_definition,
};
use super::types::render_type;
use super::{doc_comment, indent, join_blocks};

/// Render the class declaration.
///
/// The `public:` section is always present (constructors, destructor,
/// assignment operators, public methods, public members, in that order);
/// `private:` and `protected:` appear only when non-empty, each holding
/// methods then members. A class with nothing at all renders to the bare
/// skeleton `class Name {\npublic:\n};\n`.
pub fn render_class_declaration(class: &Class) -> Result<String, RenderError> {
    let mut out = doc_comment(&class.description);
    out.push_str(&format!("class {} {{\n", class.name));

    out.push_str("public:\n");
    for constructor in &class.constructors {
        out.push_str(&indent(&render_constructor_declaration(
            constructor,
            &class.name,
        )?));
    }
    if let Some(destructor) = &class.destructor {
        out.push_str(&indent(&render_destructor_declaration(
            destructor,
            &class.name,
        )));
    }
    out.push_str(&indent(&render_assignment_declarations(class)));
    out.push_str(&section_body(class, Access::Public)?);

    for access in [Access::Private, Access::Protected] {
        if class.methods.get(access).is_empty() && class.members.get(access).is_empty() {
            continue;
        }
        out.push_str(&format!("{}:\n", access.as_str()));
        out.push_str(&section_body(class, access)?);
    }

    out.push_str("};\n");
    Ok(out)
}

/// Methods then members of one access section, indented.
fn section_body(class: &Class, access: Access) -> Result<String, RenderError> {
    let mut out = String::new();
    for method in class.methods.get(access) {
        out.push_str(&render_method_declaration(method)?);
    }
    for member in class.members.get(access) {
        out.push_str(&indent(&render_member(member)?));
    }
    Ok(out)
}

fn render_member(member: &Parameter) -> Result<String, RenderError> {
    Ok(format!("{} {};\n", render_type(&member.ty)?, member.name))
}

/// Render the class definition: non-default constructor bodies, assignment
/// bodies, the destructor body, then all methods (public, private,
/// protected), blank-line separated.
pub fn render_class_definition(class: &Class) -> Result<String, RenderError> {
    let mut blocks: Vec<String> = Vec::new();
    for constructor in &class.constructors {
        blocks.push(render_constructor_definition(constructor, class)?);
    }
    blocks.extend(render_assignment_definitions(class));
    if class.destructor.is_some() {
        blocks.push(render_destructor_definition(&class.name));
    }
    for method in class.methods.iter_ordered() {
        blocks.push(render_method_definition(method, &class.name)?);
    }
    Ok(join_blocks(blocks))
}
