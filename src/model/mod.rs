//! The abstract model produced by the parsers.
//!
//! Every node is plain owned data, built once bottom-up during a single parse
//! pass and never mutated afterwards. Renderers and the source-tree assembly
//! only read these types.
//!
//! - [`Type`], [`Parameter`], [`DeclSpecifiers`] - the type system
//! - [`Callable`], [`Method`], [`Function`] - callables
//! - [`Constructor`], [`Destructor`], [`Class`] - class members
//! - [`Namespace`] - recursive namespaces
//! - [`Folder`], [`Library`], [`Project`] - directory-shaped containers

mod callable;
mod class;
mod namespace;
mod project;
mod types;

pub use callable::{Callable, DeclSpecifiers, Function, Method};
pub use class::{Access, AccessTriple, Class, Constructor, ConstructorKind, Destructor};
pub use namespace::Namespace;
pub use project::{Folder, Library, Project};
pub use types::{ArrayDim, BaseType, Declarator, Parameter, PrimitiveKind, Qualifiers, RefKind, Type};
