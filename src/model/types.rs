//! Types, qualifiers and declarators.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// The fixed set of primitive type spellings.
///
/// The table is bidirectional: the parser matches a base-type spelling against
/// it and the renderer emits the same spelling back. Multi-word spellings are
/// normalized to single spaces before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Bool,
    Char,
    Int,
    UnsignedInt,
    Short,
    UnsignedShort,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    String,
    /// Compiler-inferred (`auto`).
    Inferred,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 15] = [
        Self::Void,
        Self::Bool,
        Self::Char,
        Self::Int,
        Self::UnsignedInt,
        Self::Short,
        Self::UnsignedShort,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::String,
        Self::Inferred,
    ];

    /// Canonical source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Inferred => "auto",
        }
    }

    /// Look a spelling up in the table. `None` means the text names a custom
    /// type.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<&'static str, PrimitiveKind>> = OnceLock::new();
        let table = TABLE.get_or_init(|| {
            Self::ALL
                .into_iter()
                .map(|kind| (kind.spelling(), kind))
                .collect()
        });
        table.get(spelling).copied()
    }
}

/// Base kind of a type: a primitive from the spelling table, or a custom type
/// carrying its name verbatim.
///
/// A custom name may be empty at the model level (the parser stores whatever
/// text was left over); rendering an empty custom name is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    Primitive(PrimitiveKind),
    Custom(SmolStr),
}

/// `const` / `volatile`, independently combinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl Qualifiers {
    pub fn is_empty(self) -> bool {
        !self.is_const && !self.is_volatile
    }
}

/// Reference marker of a declarator. Never both lvalue and rvalue; a third
/// `&` in sequence is a parse error, so the model never needs a deeper state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefKind {
    #[default]
    None,
    Lvalue,
    Rvalue,
}

/// One array dimension: `[]` or `[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayDim {
    Unsized,
    Sized(u64),
}

/// Pointer/reference/array suffix of a type, as distinct from its base kind
/// and qualifiers. Array dimensions are stored outer-to-inner, matching
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declarator {
    pub pointer_depth: usize,
    pub reference: RefKind,
    pub array_dims: Vec<ArrayDim>,
}

impl Declarator {
    pub fn is_empty(&self) -> bool {
        self.pointer_depth == 0 && self.reference == RefKind::None && self.array_dims.is_empty()
    }
}

/// A fully structured type: base kind, qualifier set and declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub base: BaseType,
    pub qualifiers: Qualifiers,
    pub declarator: Declarator,
}

impl Type {
    /// A bare primitive with no qualifiers or declarators.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            base: BaseType::Primitive(kind),
            qualifiers: Qualifiers::default(),
            declarator: Declarator::default(),
        }
    }

    /// A bare custom type.
    pub fn custom(name: impl Into<SmolStr>) -> Self {
        Self {
            base: BaseType::Custom(name.into()),
            qualifiers: Qualifiers::default(),
            declarator: Declarator::default(),
        }
    }

    pub fn void() -> Self {
        Self::primitive(PrimitiveKind::Void)
    }

    pub fn is_void(&self) -> bool {
        self.base == BaseType::Primitive(PrimitiveKind::Void) && self.declarator.is_empty()
    }
}

/// A named, typed parameter. Order within a list is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: SmolStr,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_table_is_bidirectional() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_spelling(kind.spelling()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_spelling("Hero"), None);
        assert_eq!(PrimitiveKind::from_spelling(""), None);
    }

    #[test]
    fn void_detection_respects_declarators() {
        assert!(Type::void().is_void());
        let mut ptr = Type::void();
        ptr.declarator.pointer_depth = 1;
        assert!(!ptr.is_void());
    }
}
