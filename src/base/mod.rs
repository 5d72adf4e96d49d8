//! Foundation types for the cppforge pipeline.
//!
//! This module provides the line-level primitives every parser builds on:
//! - [`Line`], [`LineBuffer`] - trimmed source lines with destructive consumption
//! - [`LineKind`] - classification of a line (header / property / end marker)
//! - splitting helpers for `key = value` payloads and top-level comma lists
//!
//! This module has NO dependencies on other cppforge modules.

mod buffer;
mod split;

pub use buffer::{Line, LineBuffer, LineKind};
pub use split::{split_key_value, split_top_level, strip_quotes};
