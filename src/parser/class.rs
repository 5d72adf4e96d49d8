//! The class block parser: a small state machine.
//!
//! State is the current access section (initially private) plus an optional
//! buffered nested block. Nested method/constructor/destructor blocks inside
//! a class carry no end marker of their own: a block's property lines are
//! buffered until the next header (or the class's `_`) flushes them to the
//! matching sub-parser.

use smol_str::SmolStr;

use crate::base::{Line, LineBuffer, LineKind, split_key_value, split_top_level, strip_quotes};
use crate::error::ParseError;
use crate::model::{Access, Class};

use super::callable::parse_method_block;
use super::special::{parse_constructor, parse_constructor_list, parse_destructor};
use super::types::parse_parameter_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Method,
    Constructor,
    Destructor,
}

#[derive(Debug)]
struct Pending {
    kind: BlockKind,
    ident: SmolStr,
    header_line: usize,
    lines: Vec<Line>,
}

struct ClassParser {
    class: Class,
    access: Access,
    pending: Option<Pending>,
}

/// Parse a class block, consuming lines up to and including the class's end
/// marker. `name` comes from the already-consumed header.
pub fn parse_class(name: &str, buffer: &mut LineBuffer) -> Result<Class, ParseError> {
    let mut parser = ClassParser {
        class: Class::new(name),
        // Methods and members before the first access header land in private.
        access: Access::Private,
        pending: None,
    };
    loop {
        let line = buffer
            .pop()
            .ok_or(ParseError::UnexpectedEnd { block: "class" })?;
        match line.kind() {
            LineKind::End => {
                parser.flush()?;
                tracing::debug!(class = %parser.class.name, "parsed class block");
                return Ok(parser.class);
            }
            LineKind::Header { keyword, ident } => parser.header(keyword, ident, &line)?,
            LineKind::Property { .. } => parser.property(line)?,
            LineKind::Other => {
                return Err(ParseError::unexpected(&line.text, line.number));
            }
        }
    }
}

impl ClassParser {
    /// Dispatch the buffered nested block, if any, into the list selected by
    /// the current access section (or the class-level special-member slots).
    fn flush(&mut self) -> Result<(), ParseError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        match pending.kind {
            BlockKind::Method => {
                let method = parse_method_block(&pending.ident, &pending.lines)?;
                self.class.methods.get_mut(self.access).push(method);
            }
            BlockKind::Constructor => {
                let ctor = parse_constructor(&pending.ident, pending.header_line, &pending.lines)?;
                self.class.constructors.push(ctor);
            }
            BlockKind::Destructor => {
                if self.class.destructor.is_some() {
                    return Err(ParseError::DuplicateDestructor {
                        line: pending.header_line,
                    });
                }
                self.class.destructor = Some(parse_destructor(&pending.lines)?);
            }
        }
        Ok(())
    }

    fn header(&mut self, keyword: &str, ident: &str, line: &Line) -> Result<(), ParseError> {
        // A new header always flushes first, so the flushed block lands in
        // the access section that was current while its lines were read.
        self.flush()?;
        if let Some(access) = Access::from_token(keyword) {
            self.access = access;
            return Ok(());
        }
        let kind = match keyword {
            "method" => BlockKind::Method,
            "constructor" => BlockKind::Constructor,
            "destructor" => BlockKind::Destructor,
            _ => {
                return Err(ParseError::UnknownKeyword {
                    keyword: keyword.to_owned(),
                    line: line.number,
                });
            }
        };
        if kind == BlockKind::Method && ident.is_empty() {
            return Err(ParseError::MissingIdentifier {
                keyword: "method",
                line: line.number,
            });
        }
        if kind == BlockKind::Constructor && ident.is_empty() {
            return Err(ParseError::UnknownConstructorKind {
                kind: String::new(),
                line: line.number,
            });
        }
        self.pending = Some(Pending {
            kind,
            ident: ident.into(),
            header_line: line.number,
            lines: Vec::new(),
        });
        Ok(())
    }

    fn property(&mut self, line: Line) -> Result<(), ParseError> {
        // While a nested block is open its property lines belong to it.
        if let Some(pending) = self.pending.as_mut() {
            pending.lines.push(line);
            return Ok(());
        }
        let LineKind::Property { payload } = line.kind() else {
            unreachable!("caller matched a property line");
        };
        let (key, value) =
            split_key_value(payload).ok_or(ParseError::MalformedProperty { line: line.number })?;
        match key {
            "description" => self.class.description = strip_quotes(value).to_owned(),
            "members" => {
                let members = parse_parameter_list(value)?;
                self.class.members.get_mut(self.access).extend(members);
            }
            "constructors" => {
                let ctors = parse_constructor_list(value, line.number)?;
                self.class.constructors.extend(ctors);
            }
            "assignment" => {
                for token in split_top_level(value, ',') {
                    match token.trim() {
                        "copy" => self.class.copy_assignment = true,
                        "move" => self.class.move_assignment = true,
                        other => {
                            return Err(ParseError::UnknownProperty {
                                key: format!("assignment = {other}"),
                                block: "class",
                                line: line.number,
                            });
                        }
                    }
                }
            }
            _ => {
                return Err(ParseError::UnknownProperty {
                    key: key.to_owned(),
                    block: "class",
                    line: line.number,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConstructorKind;

    fn parse(source: &str) -> Result<Class, ParseError> {
        let mut buffer = LineBuffer::from_source(source);
        let header = buffer.pop().expect("class header");
        let LineKind::Header { keyword, ident } = header.kind() else {
            panic!("expected header line");
        };
        assert_eq!(keyword, "class");
        parse_class(ident, &mut buffer)
    }

    #[test]
    fn minimal_class() {
        let class = parse("- class Hero:\n| description = \"x\"\n_").unwrap();
        assert_eq!(class.name, "Hero");
        assert_eq!(class.description, "x");
        assert!(class.members.is_empty());
        assert!(class.methods.is_empty());
        assert!(class.constructors.is_empty());
        assert!(class.destructor.is_none());
    }

    #[test]
    fn members_follow_the_current_access_section() {
        let class = parse(
            "- class Hero:\n\
             | members = hp:int\n\
             - public:\n\
             | members = name:string\n\
             - protected:\n\
             | members = level:int, xp:long\n\
             _",
        )
        .unwrap();
        // Pre-section members default to private.
        assert_eq!(class.members.private.len(), 1);
        assert_eq!(class.members.private[0].name, "hp");
        assert_eq!(class.members.public.len(), 1);
        assert_eq!(class.members.protected.len(), 2);
    }

    #[test]
    fn methods_before_any_access_section_are_private() {
        let class = parse("- class Hero:\n- method hide:\n| return = void\n_").unwrap();
        assert_eq!(class.methods.private.len(), 1);
        assert_eq!(class.methods.private[0].0.name, "hide");
        assert!(class.methods.public.is_empty());
    }

    #[test]
    fn nested_blocks_flush_on_next_header() {
        let class = parse(
            "- class Hero:\n\
             - public:\n\
             - method attack:\n\
             | parameters = target:Hero&\n\
             - method defend:\n\
             | description = guard\n\
             _",
        )
        .unwrap();
        assert_eq!(class.methods.public.len(), 2);
        assert_eq!(class.methods.public[0].0.parameters.len(), 1);
        assert_eq!(class.methods.public[1].0.description, "guard");
    }

    #[test]
    fn constructor_blocks_and_list_property() {
        let class = parse(
            "- class Hero:\n\
             | constructors = default,copy\n\
             - constructor custom:\n\
             | parameters = hp:int\n\
             _",
        )
        .unwrap();
        let kinds: Vec<_> = class.constructors.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ConstructorKind::Default,
                ConstructorKind::Copy,
                ConstructorKind::Custom
            ]
        );
    }

    #[test]
    fn assignment_flags() {
        let class = parse("- class Hero:\n| assignment = copy,move\n_").unwrap();
        assert!(class.copy_assignment);
        assert!(class.move_assignment);
        let class = parse("- class Hero:\n| assignment = move\n_").unwrap();
        assert!(!class.copy_assignment);
        assert!(class.move_assignment);
    }

    #[test]
    fn second_destructor_is_fatal() {
        let err = parse(
            "- class Hero:\n\
             - destructor:\n\
             - destructor:\n\
             _",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateDestructor { .. }));
    }

    #[test]
    fn unknown_property_is_fatal() {
        assert!(matches!(
            parse("- class Hero:\n| color = red\n_"),
            Err(ParseError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn unknown_nested_keyword_is_fatal() {
        assert!(matches!(
            parse("- class Hero:\n- namespace util:\n_\n_"),
            Err(ParseError::UnknownKeyword { .. })
        ));
    }

    #[test]
    fn garbage_line_is_fatal() {
        assert!(matches!(
            parse("- class Hero:\nnot a dsl line\n_"),
            Err(ParseError::UnexpectedLine { .. })
        ));
    }

    #[test]
    fn missing_end_marker_is_fatal() {
        assert!(matches!(
            parse("- class Hero:\n| description = x"),
            Err(ParseError::UnexpectedEnd { block: "class" })
        ));
    }
}
