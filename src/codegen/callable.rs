//! Rendering callables: method and free-function declarations/definitions.

use crate::error::RenderError;
use crate::model::{Callable, Function, Method};

use super::types::{render_decl_specifiers, render_parameter_list, render_type};
use super::{INDENT, NOT_IMPLEMENTED, doc_comment, indent};

/// `<specifiers><return-type> <qualifier><name>(<params>)` without trailing
/// punctuation. `qualifier` is `Class::` for method definitions, empty
/// otherwise.
fn signature(callable: &Callable, qualifier: &str) -> Result<String, RenderError> {
    Ok(format!(
        "{}{} {}{}({})",
        render_decl_specifiers(&callable.specifiers),
        render_type(&callable.return_type)?,
        qualifier,
        callable.name,
        render_parameter_list(&callable.parameters)?,
    ))
}

fn declaration(callable: &Callable) -> Result<String, RenderError> {
    Ok(format!(
        "{}{};\n",
        doc_comment(&callable.description),
        signature(callable, "")?
    ))
}

fn definition(callable: &Callable, qualifier: &str) -> Result<String, RenderError> {
    Ok(format!(
        "{} {{\n{INDENT}{NOT_IMPLEMENTED}\n}}\n",
        signature(callable, qualifier)?
    ))
}

/// Render a free-function declaration, flush-left.
pub fn render_function_declaration(function: &Function) -> Result<String, RenderError> {
    declaration(&function.0)
}

/// Render a free-function definition: the signature over a stub body.
pub fn render_function_definition(function: &Function) -> Result<String, RenderError> {
    definition(&function.0, "")
}

/// Render a method declaration, indented one level for embedding in a class
/// body.
pub fn render_method_declaration(method: &Method) -> Result<String, RenderError> {
    Ok(indent(&declaration(&method.0)?))
}

/// Render a method definition, qualified with the owning class's name.
pub fn render_method_definition(method: &Method, class_name: &str) -> Result<String, RenderError> {
    definition(&method.0, &format!("{class_name}::"))
}
