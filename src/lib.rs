//! # cppforge
//!
//! Compiles a small line-oriented DSL describing a project's structure
//! (projects, libraries, folders, namespaces, classes, constructors,
//! destructors, methods, free functions and their typed signatures) into C++
//! declaration and definition source text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! tree      → source-tree assembly (arena of directories, file pairs)
//!   ↓
//! codegen   → renderers: model → declaration / definition text
//!   ↓
//! parser    → logos type lexer, recursive line-block parsers
//!   ↓
//! model     → immutable AST (Type, Callable, Class, Namespace, Project)
//!   ↓
//! error     → ParseError / RenderError
//!   ↓
//! base      → line primitives (Line, LineBuffer, splitting helpers)
//! ```
//!
//! Parsing is fail-fast and single-pass: the line buffer is consumed
//! destructively down a chain of mutually-recursive block parsers, and the
//! first error aborts the whole parse. Renderers are pure functions over the
//! finished, immutable model.
//!
//! ```
//! let project = cppforge::parse_project(
//!     "- project Game:\n- class Hero:\n| description = \"the player\"\n_\n_",
//! )?;
//! let tree = cppforge::tree::SourceTree::build(&project);
//! let pair = cppforge::tree::render_file(&tree.dir(tree.root()).files[0])?;
//! assert!(pair.declaration.contains("class Hero"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Line primitives: Line, LineBuffer, splitting helpers
pub mod base;

/// Error types: ParseError, RenderError
pub mod error;

/// The immutable model produced by the parsers
pub mod model;

/// Parsers: DSL text → model
pub mod parser;

/// Renderers: model → declaration / definition text
pub mod codegen;

/// Source-tree assembly: arena of directories and generated file pairs
pub mod tree;

pub use error::{ParseError, RenderError};
pub use parser::parse_project;
