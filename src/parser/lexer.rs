//! Logos-based lexer for the type-declarator sub-grammar.
//!
//! A single type token (already isolated from its surrounding key/value or
//! parameter syntax) is tokenized into qualifier/specifier keywords,
//! declarator symbols and catch-all words. Whitespace is skipped, so
//! `int * &` and `int*&` tokenize identically.

use logos::Logos;

use crate::error::ParseError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub(crate) enum TypeToken {
    #[token("const")]
    Const,

    #[token("volatile")]
    Volatile,

    #[token("static")]
    Static,

    #[token("inline")]
    Inline,

    #[token("constexpr")]
    Constexpr,

    #[token("*")]
    Star,

    // `&&` must win over two `&`s: it marks an rvalue reference directly.
    #[token("&&")]
    AmpAmp,

    #[token("&")]
    Amp,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    /// Anything that is not whitespace or a declarator symbol. Base-type
    /// spellings, array dimensions and custom type names all arrive as words.
    #[regex(r"[^ \t*&\[\]]+")]
    Word,
}

/// A token with its source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tok<'a> {
    pub kind: TypeToken,
    pub text: &'a str,
}

impl Tok<'_> {
    /// True for tokens that contribute to a base-type spelling (a qualifier
    /// or specifier keyword appearing mid-type is just a word there).
    pub fn is_wordlike(&self) -> bool {
        matches!(
            self.kind,
            TypeToken::Word
                | TypeToken::Const
                | TypeToken::Volatile
                | TypeToken::Static
                | TypeToken::Inline
                | TypeToken::Constexpr
        )
    }
}

/// Tokenize a full type token.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Tok<'_>>, ParseError> {
    let mut lexer = TypeToken::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Tok {
                kind,
                text: lexer.slice(),
            }),
            Err(()) => return Err(ParseError::MalformedType(input.to_owned())),
        }
    }
    Ok(tokens)
}
