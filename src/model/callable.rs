//! Callables: the shared shape behind methods and free functions.

use smol_str::SmolStr;

use super::types::{Parameter, Type};

/// Declaration specifiers: three independent flags. Canonical render order is
/// static, then inline, then constexpr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeclSpecifiers {
    pub is_static: bool,
    pub is_inline: bool,
    pub is_constexpr: bool,
}

impl DeclSpecifiers {
    pub fn is_empty(self) -> bool {
        !self.is_static && !self.is_inline && !self.is_constexpr
    }
}

/// A callable: return type, name, ordered parameters, declaration specifiers
/// and a free-text description.
///
/// Methods and free functions share this shape; they differ only in how the
/// renderer formats them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: SmolStr,
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
    pub specifiers: DeclSpecifiers,
    pub description: String,
}

impl Callable {
    /// A void callable with no parameters, no specifiers and no description.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            return_type: Type::void(),
            parameters: Vec::new(),
            specifiers: DeclSpecifiers::default(),
            description: String::new(),
        }
    }
}

/// A callable owned by a class. Declarations are indented for embedding in
/// the class body; definitions are qualified with the owning class's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method(pub Callable);

/// A free function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function(pub Callable);
