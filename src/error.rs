//! Error types for parsing and rendering.
//!
//! Every failure is fatal to the whole operation: the first error aborts the
//! parse with no partial model, and renderers only fail on data that escaped
//! the parser's invariants (a custom type with no name).

use thiserror::Error;

/// Errors raised while parsing DSL text into the model.
///
/// Grammar errors (unknown keywords, malformed properties, bad declarators)
/// and structural errors (constraint violations such as parameters on a copy
/// constructor) share one type; both abort the parse at the point of
/// detection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown block keyword in a header line.
    #[error("line {line}: unknown block keyword '{keyword}'")]
    UnknownKeyword { keyword: String, line: usize },

    /// A block kind that requires an identifier got none.
    #[error("line {line}: '{keyword}' block requires an identifier")]
    MissingIdentifier { keyword: &'static str, line: usize },

    /// A property line without `=`.
    #[error("line {line}: malformed property line (expected 'key = value')")]
    MalformedProperty { line: usize },

    /// A property key the enclosing block does not recognize.
    #[error("line {line}: unknown property '{key}' in {block} block")]
    UnknownProperty {
        key: String,
        block: &'static str,
        line: usize,
    },

    /// A type token with text after its declarator suffix began.
    #[error("malformed type '{0}'")]
    MalformedType(String),

    /// More reference markers than `&&` allows.
    #[error("too many reference markers in type '{0}'")]
    TripleReference(String),

    /// `[` without a matching `]`, or a stray `]`.
    #[error("unmatched array bracket in type '{0}'")]
    UnmatchedBracket(String),

    /// An array dimension that is neither empty nor all digits.
    #[error("array dimension must be empty or numeric in type '{0}'")]
    BadArrayDimension(String),

    /// A parameter token that does not contain exactly one `:`.
    #[error("parameter '{0}' must be written 'name: type'")]
    MissingColon(String),

    /// Leftover text after the declaration-specifier keywords.
    #[error("unknown declaration specifier '{0}'")]
    UnknownSpecifier(String),

    /// Parameters supplied to a default/copy/move constructor.
    #[error("'{kind}' constructor cannot take parameters")]
    UnexpectedParameters { kind: &'static str },

    /// A constructor header whose identifier is not default/copy/move/custom.
    #[error("line {line}: unknown constructor kind '{kind}'")]
    UnknownConstructorKind { kind: String, line: usize },

    /// A second destructor block in one class.
    #[error("line {line}: class already has a destructor")]
    DuplicateDestructor { line: usize },

    /// A `method` block outside a class body.
    #[error("line {line}: 'method' blocks are only valid inside a class")]
    MethodOutsideClass { line: usize },

    /// A `library` block nested inside a library.
    #[error("line {line}: libraries cannot nest inside libraries")]
    NestedLibrary { line: usize },

    /// A `project` block nested inside another block.
    #[error("line {line}: 'project' must be the outermost block")]
    NestedProject { line: usize },

    /// A line that is neither a header, a property, nor an end marker,
    /// appearing before the enclosing block has seen any valid content.
    #[error("line {line}: unexpected line '{text}'")]
    UnexpectedLine { text: String, line: usize },

    /// The buffer ran out before a block reached its end marker.
    #[error("unexpected end of input inside {block} block")]
    UnexpectedEnd { block: &'static str },
}

impl ParseError {
    /// Shorthand for the leading-garbage error.
    pub(crate) fn unexpected(text: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedLine {
            text: text.into(),
            line,
        }
    }
}

/// Errors raised while rendering a model to source text.
///
/// Rendering is total on parser-produced models; the only failure is a
/// defensive check on hand-built data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A custom type whose name is empty.
    #[error("cannot render a custom type with no name")]
    UnnamedCustomType,
}
