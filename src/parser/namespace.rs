//! The namespace block parser.

use crate::base::{LineBuffer, LineKind, split_key_value, strip_quotes};
use crate::error::ParseError;
use crate::model::Namespace;

use super::callable::parse_function_block;
use super::class::parse_class;

/// Parse a namespace block, consuming lines up to and including its end
/// marker. An empty `name` denotes an anonymous namespace.
///
/// Nested `namespace`/`class`/`function` blocks recurse; `description` is the
/// only property. Non-DSL lines are fatal before the block has seen valid
/// content and silently skipped afterwards (deliberate leniency for garbage
/// trailing a block's logical end; see the project parser for the same rule).
pub fn parse_namespace(name: &str, buffer: &mut LineBuffer) -> Result<Namespace, ParseError> {
    let mut namespace = Namespace::new(name);
    let mut seen_content = false;
    loop {
        let line = buffer
            .pop()
            .ok_or(ParseError::UnexpectedEnd { block: "namespace" })?;
        match line.kind() {
            LineKind::End => return Ok(namespace),
            LineKind::Header { keyword, ident } => {
                match keyword {
                    "namespace" => {
                        namespace.namespaces.push(parse_namespace(ident, buffer)?);
                    }
                    "class" => {
                        require_ident("class", ident, line.number)?;
                        namespace.classes.push(parse_class(ident, buffer)?);
                    }
                    "function" => {
                        require_ident("function", ident, line.number)?;
                        namespace.functions.push(parse_function_block(ident, buffer)?);
                    }
                    "method" => {
                        return Err(ParseError::MethodOutsideClass { line: line.number });
                    }
                    _ => {
                        return Err(ParseError::UnknownKeyword {
                            keyword: keyword.to_owned(),
                            line: line.number,
                        });
                    }
                }
                seen_content = true;
            }
            LineKind::Property { payload } => {
                let (key, value) = split_key_value(payload)
                    .ok_or(ParseError::MalformedProperty { line: line.number })?;
                match key {
                    "description" => namespace.description = strip_quotes(value).to_owned(),
                    _ => {
                        return Err(ParseError::UnknownProperty {
                            key: key.to_owned(),
                            block: "namespace",
                            line: line.number,
                        });
                    }
                }
                seen_content = true;
            }
            LineKind::Other => {
                if !seen_content {
                    return Err(ParseError::unexpected(&line.text, line.number));
                }
                tracing::debug!(line = %line.text, number = line.number, "skipping trailing line");
            }
        }
    }
}

pub(crate) fn require_ident(
    keyword: &'static str,
    ident: &str,
    line: usize,
) -> Result<(), ParseError> {
    if ident.is_empty() {
        Err(ParseError::MissingIdentifier { keyword, line })
    } else {
        Ok(())
    }
}
