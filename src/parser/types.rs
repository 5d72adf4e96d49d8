//! The type-declarator sub-grammar: types, parameter lists and declaration
//! specifiers.

use crate::base::split_top_level;
use crate::error::ParseError;
use crate::model::{
    ArrayDim, BaseType, DeclSpecifiers, Declarator, Parameter, PrimitiveKind, Qualifiers, RefKind,
    Type,
};

use super::lexer::{Tok, TypeToken, tokenize};

/// Parse a raw type token into a structured [`Type`].
///
/// Grammar: `[qualifier...] basetype [*...][&|&&][[dim]...]`. A leading run
/// of `const`/`volatile` accumulates qualifiers; the following word run forms
/// the base-type spelling (matched against the primitive table, anything else
/// becoming a custom type with that text verbatim, even when empty); the
/// remaining declarator symbols accumulate pointer depth, the reference
/// marker and array dimensions.
///
/// Parsing is total except for the explicit grammar errors: a third reference
/// marker, an unmatched bracket, a non-numeric array dimension, and word text
/// after the declarator suffix began.
pub fn parse_type(input: &str) -> Result<Type, ParseError> {
    let tokens = tokenize(input)?;
    let mut pos = 0;

    // (a) leading qualifier run.
    let mut qualifiers = Qualifiers::default();
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TypeToken::Const => qualifiers.is_const = true,
            TypeToken::Volatile => qualifiers.is_volatile = true,
            _ => break,
        }
        pos += 1;
    }

    // (b) the base-type spelling: a run of word-like tokens joined by single
    // spaces, so `unsigned long long` normalizes regardless of spacing. A
    // qualifier keyword past this point is plain text (`int const` is a
    // custom type named "int const", never a silently reordered qualifier).
    let mut words: Vec<&str> = Vec::new();
    while let Some(tok) = tokens.get(pos) {
        if tok.is_wordlike() {
            words.push(tok.text);
            pos += 1;
        } else {
            break;
        }
    }
    let spelling = words.join(" ");
    let base = match PrimitiveKind::from_spelling(&spelling) {
        Some(kind) => BaseType::Primitive(kind),
        None => BaseType::Custom(spelling.into()),
    };

    // (c) declarator suffix.
    let declarator = parse_declarator_suffix(input, &tokens[pos..])?;

    Ok(Type {
        base,
        qualifiers,
        declarator,
    })
}

fn parse_declarator_suffix(input: &str, tokens: &[Tok<'_>]) -> Result<Declarator, ParseError> {
    let mut declarator = Declarator::default();
    let mut pos = 0;
    while let Some(tok) = tokens.get(pos) {
        match tok.kind {
            TypeToken::Star => declarator.pointer_depth += 1,
            TypeToken::Amp => {
                declarator.reference = match declarator.reference {
                    RefKind::None => RefKind::Lvalue,
                    RefKind::Lvalue => RefKind::Rvalue,
                    RefKind::Rvalue => {
                        return Err(ParseError::TripleReference(input.to_owned()));
                    }
                };
            }
            TypeToken::AmpAmp => {
                if declarator.reference != RefKind::None {
                    return Err(ParseError::TripleReference(input.to_owned()));
                }
                declarator.reference = RefKind::Rvalue;
            }
            TypeToken::LBracket => {
                pos += 1;
                let dim = match tokens.get(pos) {
                    Some(Tok {
                        kind: TypeToken::RBracket,
                        ..
                    }) => ArrayDim::Unsized,
                    Some(tok) if tok.is_wordlike() => {
                        let parsed = tok
                            .text
                            .parse::<u64>()
                            .map_err(|_| ParseError::BadArrayDimension(input.to_owned()))?;
                        pos += 1;
                        match tokens.get(pos) {
                            Some(Tok {
                                kind: TypeToken::RBracket,
                                ..
                            }) => ArrayDim::Sized(parsed),
                            _ => return Err(ParseError::UnmatchedBracket(input.to_owned())),
                        }
                    }
                    _ => return Err(ParseError::UnmatchedBracket(input.to_owned())),
                };
                declarator.array_dims.push(dim);
            }
            TypeToken::RBracket => {
                return Err(ParseError::UnmatchedBracket(input.to_owned()));
            }
            // A word after the declarator suffix began.
            _ => return Err(ParseError::MalformedType(input.to_owned())),
        }
        pos += 1;
    }
    Ok(declarator)
}

/// Parse a comma-separated parameter list.
///
/// Commas split at nesting depth zero only; a trailing comma produces no
/// extra entry. Each entry must contain exactly one `:` separating name from
/// type.
pub fn parse_parameter_list(input: &str) -> Result<Vec<Parameter>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut parameters = Vec::new();
    for piece in split_top_level(input, ',') {
        let piece = piece.trim();
        if piece.matches(':').count() != 1 {
            return Err(ParseError::MissingColon(piece.to_owned()));
        }
        // Exactly one colon, checked above.
        let (name, ty) = piece.split_once(':').unwrap_or((piece, ""));
        parameters.push(Parameter::new(name.trim(), parse_type(ty)?));
    }
    Ok(parameters)
}

/// Strip `static`/`inline`/`constexpr` keywords, in any order, from the front
/// of the text. Scanning stops at the first unknown token, which is returned
/// as the remainder; callers reject a non-empty remainder where that matters.
pub fn parse_decl_specifiers(input: &str) -> (DeclSpecifiers, &str) {
    let mut specifiers = DeclSpecifiers::default();
    let mut rest = input.trim();
    loop {
        let (word, tail) = match rest.split_once(char::is_whitespace) {
            Some((word, tail)) => (word, tail.trim_start()),
            None => (rest, ""),
        };
        match word {
            "static" => specifiers.is_static = true,
            "inline" => specifiers.is_inline = true,
            "constexpr" => specifiers.is_constexpr = true,
            _ => break,
        }
        rest = tail;
        if rest.is_empty() {
            break;
        }
    }
    (specifiers, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_primitive() {
        let ty = parse_type("double").unwrap();
        assert_eq!(ty, Type::primitive(PrimitiveKind::Double));
    }

    #[test]
    fn multiword_primitive_normalizes_spacing() {
        let ty = parse_type("unsigned   long  long").unwrap();
        assert_eq!(ty.base, BaseType::Primitive(PrimitiveKind::UnsignedLongLong));
    }

    #[test]
    fn qualifiers_accumulate_in_any_order() {
        let a = parse_type("const volatile int").unwrap();
        let b = parse_type("volatile const int").unwrap();
        assert!(a.qualifiers.is_const && a.qualifiers.is_volatile);
        assert_eq!(a.qualifiers, b.qualifiers);
    }

    #[test]
    fn pointer_and_lvalue_reference() {
        let ty = parse_type("int*&").unwrap();
        assert_eq!(ty.declarator.pointer_depth, 1);
        assert_eq!(ty.declarator.reference, RefKind::Lvalue);
    }

    #[test]
    fn double_ampersand_is_rvalue() {
        assert_eq!(
            parse_type("int&&").unwrap().declarator.reference,
            RefKind::Rvalue
        );
        assert_eq!(
            parse_type("int& &").unwrap().declarator.reference,
            RefKind::Rvalue
        );
    }

    #[test]
    fn triple_reference_is_an_error() {
        assert!(matches!(
            parse_type("int&&&"),
            Err(ParseError::TripleReference(_))
        ));
    }

    #[test]
    fn array_dimensions_keep_declaration_order() {
        let ty = parse_type("int[2][3]").unwrap();
        assert_eq!(
            ty.declarator.array_dims,
            vec![ArrayDim::Sized(2), ArrayDim::Sized(3)]
        );
        let ty = parse_type("int*[5]").unwrap();
        assert_eq!(ty.declarator.pointer_depth, 1);
        assert_eq!(ty.declarator.array_dims, vec![ArrayDim::Sized(5)]);
    }

    #[test]
    fn unsized_array_dimension() {
        let ty = parse_type("char[]").unwrap();
        assert_eq!(ty.declarator.array_dims, vec![ArrayDim::Unsized]);
    }

    #[test]
    fn bad_array_dimensions_are_errors() {
        assert!(matches!(
            parse_type("int[x]"),
            Err(ParseError::BadArrayDimension(_))
        ));
        assert!(matches!(
            parse_type("int[5"),
            Err(ParseError::UnmatchedBracket(_))
        ));
        assert!(matches!(
            parse_type("int]"),
            Err(ParseError::UnmatchedBracket(_))
        ));
    }

    #[test]
    fn unmatched_custom_spelling_is_verbatim() {
        let ty = parse_type("Hero").unwrap();
        assert_eq!(ty.base, BaseType::Custom("Hero".into()));
        // Trailing qualifier keywords are not reordered; the text is custom.
        let ty = parse_type("int const").unwrap();
        assert_eq!(ty.base, BaseType::Custom("int const".into()));
    }

    #[test]
    fn empty_custom_name_still_parses() {
        let ty = parse_type("const").unwrap();
        assert!(ty.qualifiers.is_const);
        assert_eq!(ty.base, BaseType::Custom("".into()));
    }

    #[test]
    fn word_after_declarator_is_an_error() {
        assert!(matches!(
            parse_type("int* x"),
            Err(ParseError::MalformedType(_))
        ));
    }

    #[test]
    fn parameter_list_with_qualified_types() {
        let params = parse_parameter_list("a:int, b:const volatile int").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "a");
        assert!(params[1].ty.qualifiers.is_const);
        assert!(params[1].ty.qualifiers.is_volatile);
    }

    #[test]
    fn parameter_list_tolerates_trailing_comma() {
        let params = parse_parameter_list("a:int, b:string,").unwrap();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn empty_parameter_list() {
        assert!(parse_parameter_list("   ").unwrap().is_empty());
    }

    #[test]
    fn parameter_without_colon_is_fatal() {
        assert!(matches!(
            parse_parameter_list("a:int, b"),
            Err(ParseError::MissingColon(_))
        ));
    }

    #[test]
    fn specifiers_in_any_order() {
        let (spec, rest) = parse_decl_specifiers("constexpr static");
        assert!(spec.is_static && spec.is_constexpr && !spec.is_inline);
        assert_eq!(rest, "");
    }

    #[test]
    fn specifier_scan_stops_at_unknown_text() {
        let (spec, rest) = parse_decl_specifiers("static virtual");
        assert!(spec.is_static);
        assert_eq!(rest, "virtual");
    }
}
