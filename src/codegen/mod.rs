//! Renderers: model → declaration / definition source text.
//!
//! Every renderer is a pure function from an immutable model node to text,
//! the exact inverse of the corresponding parser. Definitions are stubs: a
//! body is always exactly one not-implemented statement, never real logic.
//!
//! The only failure mode is a defensive check on hand-built data
//! ([`crate::error::RenderError::UnnamedCustomType`]).

mod callable;
mod class;
mod namespace;
mod special;
mod types;

pub use callable::{
    render_function_declaration, render_function_definition, render_method_declaration,
    render_method_definition,
};
pub use class::{render_class_declaration, render_class_definition};
pub use namespace::{render_namespace_declaration, render_namespace_definition};
pub use special::{
    render_assignment_declarations, render_assignment_definitions,
    render_constructor_declaration, render_constructor_definition,
    render_destructor_declaration, render_destructor_definition,
};
pub use types::{render_decl_specifiers, render_parameter_list, render_type};

/// One indentation level in generated source.
pub(crate) const INDENT: &str = "    ";

/// The single statement every stub body contains.
pub(crate) const NOT_IMPLEMENTED: &str = "throw std::logic_error(\"not implemented\");";

/// Indent every non-empty line of `text` by one level.
pub(crate) fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// A `/// ...` doc line for a non-empty description, empty string otherwise.
pub(crate) fn doc_comment(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("/// {description}\n")
    }
}

/// Join "\n"-terminated blocks with one blank line between them, skipping
/// empty blocks.
pub(crate) fn join_blocks(blocks: impl IntoIterator<Item = String>) -> String {
    let mut out = String::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&block);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a {\n\nb\n}\n"), "    a {\n\n    b\n    }\n");
    }

    #[test]
    fn join_blocks_separates_with_blank_lines() {
        let joined = join_blocks(vec!["a\n".to_owned(), String::new(), "b\n".to_owned()]);
        assert_eq!(joined, "a\n\nb\n");
    }
}
