//! Parsers: DSL text → model.
//!
//! The surface grammar is line-oriented. [`crate::base::LineBuffer`] feeds a
//! family of mutually-recursive block parsers, each of which consumes a
//! prefix of the buffer up to and including its own end marker (`_`) and
//! leaves the remainder for its caller. The type-declarator sub-grammar is
//! tokenized with logos and parsed separately.
//!
//! All parsing is fail-fast: the first error aborts the whole parse with no
//! partial model.

mod callable;
mod class;
mod lexer;
mod namespace;
mod project;
mod special;
mod types;

pub use callable::{parse_function_block, parse_method_block};
pub use class::parse_class;
pub use namespace::parse_namespace;
pub use project::{parse_folder, parse_library, parse_project};
pub use types::{parse_decl_specifiers, parse_parameter_list, parse_type};
