//! Special members: constructors and destructors.

use crate::base::{Line, LineKind, split_key_value, split_top_level, strip_quotes};
use crate::error::ParseError;
use crate::model::{Constructor, ConstructorKind, Destructor};

use super::types::parse_parameter_list;

/// Parse a constructor block. The header identifier names the kind
/// (`default`/`copy`/`move`/`custom`); only `parameters` and `description`
/// properties are accepted, and [`Constructor::new`] enforces that non-custom
/// kinds carry no parameters.
pub(crate) fn parse_constructor(
    kind_token: &str,
    header_line: usize,
    lines: &[Line],
) -> Result<Constructor, ParseError> {
    let kind =
        ConstructorKind::from_token(kind_token).ok_or_else(|| ParseError::UnknownConstructorKind {
            kind: kind_token.to_owned(),
            line: header_line,
        })?;
    let mut parameters = Vec::new();
    let mut description = String::new();
    for line in lines {
        let payload = match line.kind() {
            LineKind::Property { payload } => payload,
            _ => return Err(ParseError::unexpected(&line.text, line.number)),
        };
        let (key, value) =
            split_key_value(payload).ok_or(ParseError::MalformedProperty { line: line.number })?;
        match key {
            "parameters" => parameters = parse_parameter_list(value)?,
            "description" => description = strip_quotes(value).to_owned(),
            _ => {
                return Err(ParseError::UnknownProperty {
                    key: key.to_owned(),
                    block: "constructor",
                    line: line.number,
                });
            }
        }
    }
    Constructor::new(kind, parameters, description)
}

/// Parse the comma-separated value of a `constructors = default,copy,move`
/// property into pre-built constructors.
pub(crate) fn parse_constructor_list(
    value: &str,
    line: usize,
) -> Result<Vec<Constructor>, ParseError> {
    let mut constructors = Vec::new();
    for token in split_top_level(value, ',') {
        let token = token.trim();
        let kind =
            ConstructorKind::from_token(token).ok_or_else(|| ParseError::UnknownConstructorKind {
                kind: token.to_owned(),
                line,
            })?;
        constructors.push(Constructor::new(kind, Vec::new(), String::new())?);
    }
    Ok(constructors)
}

/// Parse a destructor block: `description` is the only accepted property.
pub(crate) fn parse_destructor(lines: &[Line]) -> Result<Destructor, ParseError> {
    let mut destructor = Destructor::default();
    for line in lines {
        let payload = match line.kind() {
            LineKind::Property { payload } => payload,
            _ => return Err(ParseError::unexpected(&line.text, line.number)),
        };
        let (key, value) =
            split_key_value(payload).ok_or(ParseError::MalformedProperty { line: line.number })?;
        match key {
            "description" => destructor.description = strip_quotes(value).to_owned(),
            _ => {
                return Err(ParseError::UnknownProperty {
                    key: key.to_owned(),
                    block: "destructor",
                    line: line.number,
                });
            }
        }
    }
    Ok(destructor)
}
