//! Callable property blocks: methods and free functions.

use crate::base::{Line, LineBuffer, LineKind, split_key_value, strip_quotes};
use crate::error::ParseError;
use crate::model::{Callable, Function, Method};

use super::types::{parse_decl_specifiers, parse_parameter_list, parse_type};

/// Parse a callable's buffered property lines.
///
/// Recognized keys: `return`, `parameters`, `description`, `declaration`.
/// Anything else is fatal. Absent keys fall back to a void return, an empty
/// parameter list, an empty description and no specifiers.
pub(crate) fn parse_callable(
    name: &str,
    block: &'static str,
    lines: &[Line],
) -> Result<Callable, ParseError> {
    let mut callable = Callable::new(name);
    for line in lines {
        let payload = match line.kind() {
            LineKind::Property { payload } => payload,
            _ => return Err(ParseError::unexpected(&line.text, line.number)),
        };
        let (key, value) =
            split_key_value(payload).ok_or(ParseError::MalformedProperty { line: line.number })?;
        match key {
            "return" => callable.return_type = parse_type(value)?,
            "parameters" => callable.parameters = parse_parameter_list(value)?,
            "description" => callable.description = strip_quotes(value).to_owned(),
            "declaration" => {
                let (specifiers, rest) = parse_decl_specifiers(value);
                if !rest.is_empty() {
                    return Err(ParseError::UnknownSpecifier(rest.to_owned()));
                }
                callable.specifiers = specifiers;
            }
            _ => {
                return Err(ParseError::UnknownProperty {
                    key: key.to_owned(),
                    block,
                    line: line.number,
                });
            }
        }
    }
    Ok(callable)
}

/// Parse a method block already buffered by the class parser.
pub fn parse_method_block(name: &str, lines: &[Line]) -> Result<Method, ParseError> {
    Ok(Method(parse_callable(name, "method", lines)?))
}

/// Parse a free-function block, consuming property lines from the shared
/// buffer up to and including the block's own end marker.
pub fn parse_function_block(name: &str, buffer: &mut LineBuffer) -> Result<Function, ParseError> {
    let mut lines = Vec::new();
    loop {
        let line = buffer
            .pop()
            .ok_or(ParseError::UnexpectedEnd { block: "function" })?;
        match line.kind() {
            LineKind::End => break,
            LineKind::Property { .. } => lines.push(line),
            _ => return Err(ParseError::unexpected(&line.text, line.number)),
        }
    }
    Ok(Function(parse_callable(name, "function", &lines)?))
}
