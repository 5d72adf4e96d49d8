//! Rendering namespace blocks.

use crate::error::RenderError;
use crate::model::Namespace;

use super::callable::{render_function_declaration, render_function_definition};
use super::class::{render_class_declaration, render_class_definition};
use super::{doc_comment, indent, join_blocks};

/// Render a namespace declaration: the wrapper around nested class,
/// function and namespace declarations, in that order.
///
/// Declaration bodies are inserted verbatim (not re-indented); an empty name
/// renders the anonymous form `namespace { ... }`.
pub fn render_namespace_declaration(namespace: &Namespace) -> Result<String, RenderError> {
    let body = join_blocks(collect(namespace, true)?);
    Ok(format!(
        "{}{} {{\n{body}}}\n",
        doc_comment(&namespace.description),
        wrapper(namespace)
    ))
}

/// Render a namespace definition. Definition bodies are indented one level,
/// unlike declarations.
pub fn render_namespace_definition(namespace: &Namespace) -> Result<String, RenderError> {
    let body = indent(&join_blocks(collect(namespace, false)?));
    Ok(format!("{} {{\n{body}}}\n", wrapper(namespace)))
}

fn wrapper(namespace: &Namespace) -> String {
    if namespace.is_anonymous() {
        "namespace".to_owned()
    } else {
        format!("namespace {}", namespace.name)
    }
}

fn collect(namespace: &Namespace, declarations: bool) -> Result<Vec<String>, RenderError> {
    let mut blocks = Vec::new();
    for class in &namespace.classes {
        blocks.push(if declarations {
            render_class_declaration(class)?
        } else {
            render_class_definition(class)?
        });
    }
    for function in &namespace.functions {
        blocks.push(if declarations {
            render_function_declaration(function)?
        } else {
            render_function_definition(function)?
        });
    }
    for nested in &namespace.namespaces {
        blocks.push(if declarations {
            render_namespace_declaration(nested)?
        } else {
            render_namespace_definition(nested)?
        });
    }
    Ok(blocks)
}
