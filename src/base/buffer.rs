//! Owned line buffer with destructive front consumption.
//!
//! The whole DSL grammar is line-oriented: every parser consumes a prefix of
//! the buffer up to and including its own end marker (`_`) and leaves the
//! remainder for its caller. The buffer is passed down the recursive call
//! chain by exclusive borrow, so no line is ever read twice.

use std::collections::VecDeque;

/// End-of-block marker: a line containing exactly `_`.
pub const END_MARKER: &str = "_";

/// One trimmed DSL line together with its 1-based source line number.
///
/// Line numbers survive into error messages; the text itself has leading and
/// trailing whitespace stripped at buffer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Classify this line into one of the DSL's surface forms.
    pub fn kind(&self) -> LineKind<'_> {
        let text = self.text.as_str();
        if text == END_MARKER {
            return LineKind::End;
        }
        if let Some(rest) = text.strip_prefix('-') {
            let rest = rest.trim();
            let rest = rest.strip_suffix(':').unwrap_or(rest).trim_end();
            let (keyword, ident) = match rest.split_once(char::is_whitespace) {
                Some((kw, id)) => (kw, id.trim()),
                None => (rest, ""),
            };
            return LineKind::Header { keyword, ident };
        }
        if let Some(rest) = text.strip_prefix('|') {
            return LineKind::Property {
                payload: rest.trim(),
            };
        }
        LineKind::Other
    }
}

/// Surface form of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `- <keyword> [<identifier>]:` — opens a nested block (or switches the
    /// access section inside a class). The trailing colon is already stripped;
    /// `ident` is empty when the header carries no identifier.
    Header { keyword: &'a str, ident: &'a str },
    /// `| <payload>` — a property line; the payload still contains `key = value`.
    Property { payload: &'a str },
    /// `_` — closes the nearest open block.
    End,
    /// Anything else. Fatal before a block has seen valid content, silently
    /// skipped afterwards (see the recursive block parsers).
    Other,
}

/// A deque of trimmed, non-blank lines consumed front-to-back by the parsers.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: VecDeque<Line>,
}

impl LineBuffer {
    /// Split raw source text into a buffer. Blank lines are dropped and the
    /// rest are trimmed; original line numbers are preserved for errors.
    pub fn from_source(source: &str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .filter_map(|(idx, raw)| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Line::new(idx + 1, trimmed))
                }
            })
            .collect();
        Self { lines }
    }

    /// Remove and return the next line.
    pub fn pop(&mut self) -> Option<Line> {
        self.lines.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
