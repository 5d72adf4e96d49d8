//! Namespaces: recursive containers for classes and free functions.

use smol_str::SmolStr;

use super::callable::Function;
use super::class::Class;

/// A namespace. An empty name denotes an anonymous namespace.
///
/// Unlike folders, a namespace does not correspond to a directory: its
/// functions stay a flat list next to the nested classes and namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: SmolStr,
    pub description: String,
    pub classes: Vec<Class>,
    pub functions: Vec<Function>,
    pub namespaces: Vec<Namespace>,
}

impl Namespace {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            classes: Vec::new(),
            functions: Vec::new(),
            namespaces: Vec::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}
