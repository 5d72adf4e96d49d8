//! Rendering types, parameter lists and declaration specifiers.

use crate::error::RenderError;
use crate::model::{ArrayDim, BaseType, DeclSpecifiers, Parameter, RefKind, Type};

/// Render a structured type back to its source spelling: qualifiers in
/// `const volatile` order, the base spelling, then pointer stars, the
/// reference marker and each array dimension in stored order.
pub fn render_type(ty: &Type) -> Result<String, RenderError> {
    let mut out = String::new();
    if ty.qualifiers.is_const {
        out.push_str("const ");
    }
    if ty.qualifiers.is_volatile {
        out.push_str("volatile ");
    }
    match &ty.base {
        BaseType::Primitive(kind) => out.push_str(kind.spelling()),
        BaseType::Custom(name) => {
            if name.is_empty() {
                return Err(RenderError::UnnamedCustomType);
            }
            out.push_str(name);
        }
    }
    for _ in 0..ty.declarator.pointer_depth {
        out.push('*');
    }
    match ty.declarator.reference {
        RefKind::None => {}
        RefKind::Lvalue => out.push('&'),
        RefKind::Rvalue => out.push_str("&&"),
    }
    for dim in &ty.declarator.array_dims {
        match dim {
            ArrayDim::Unsized => out.push_str("[]"),
            ArrayDim::Sized(n) => {
                out.push('[');
                out.push_str(&n.to_string());
                out.push(']');
            }
        }
    }
    Ok(out)
}

/// Render `type name` pairs joined by `", "`.
pub fn render_parameter_list(parameters: &[Parameter]) -> Result<String, RenderError> {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|param| Ok(format!("{} {}", render_type(&param.ty)?, param.name)))
        .collect::<Result<_, RenderError>>()?;
    Ok(rendered.join(", "))
}

/// Render the specifier keywords in canonical order with one trailing space,
/// so the result concatenates directly before a return type. Empty when no
/// flag is set.
pub fn render_decl_specifiers(specifiers: &DeclSpecifiers) -> String {
    let mut out = String::new();
    if specifiers.is_static {
        out.push_str("static ");
    }
    if specifiers.is_inline {
        out.push_str("inline ");
    }
    if specifiers.is_constexpr {
        out.push_str("constexpr ");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrimitiveKind;
    use crate::parser::{parse_parameter_list, parse_type};

    #[test]
    fn qualifier_order_is_const_volatile() {
        let ty = parse_type("volatile const int").unwrap();
        assert_eq!(render_type(&ty).unwrap(), "const volatile int");
    }

    #[test]
    fn declarators_render_in_grammar_order() {
        let ty = parse_type("int*[5]").unwrap();
        assert_eq!(render_type(&ty).unwrap(), "int*[5]");
        let ty = parse_type("char**&&[2][]").unwrap();
        assert_eq!(render_type(&ty).unwrap(), "char**&&[2][]");
    }

    #[test]
    fn unnamed_custom_type_is_a_render_error() {
        let ty = Type::custom("");
        assert_eq!(render_type(&ty), Err(RenderError::UnnamedCustomType));
    }

    #[test]
    fn parameter_list_round_trip() {
        let params = parse_parameter_list("a:int, b:const volatile string&").unwrap();
        assert_eq!(
            render_parameter_list(&params).unwrap(),
            "int a, const volatile string& b"
        );
    }

    #[test]
    fn specifier_canonical_order_and_trailing_space() {
        let mut spec = DeclSpecifiers::default();
        spec.is_constexpr = true;
        spec.is_static = true;
        assert_eq!(render_decl_specifiers(&spec), "static constexpr ");
        assert_eq!(render_decl_specifiers(&DeclSpecifiers::default()), "");
    }

    #[test]
    fn primitive_spellings_round_trip() {
        for kind in PrimitiveKind::ALL {
            let ty = parse_type(kind.spelling()).unwrap();
            assert_eq!(render_type(&ty).unwrap(), kind.spelling());
        }
    }
}
