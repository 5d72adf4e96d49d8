//! Classes and their special members.

use smol_str::SmolStr;

use super::callable::Method;
use super::types::Parameter;
use crate::error::ParseError;

/// Constructor kind. Only `custom` constructors may carry parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    Default,
    Copy,
    Move,
    Custom,
}

impl ConstructorKind {
    /// Map a DSL kind token; `None` for anything unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "default" => Some(Self::Default),
            "copy" => Some(Self::Copy),
            "move" => Some(Self::Move),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Custom => "custom",
        }
    }
}

/// A constructor. Construction enforces the parameter-count constraint, so a
/// default/copy/move constructor in the model never carries parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    kind: ConstructorKind,
    parameters: Vec<Parameter>,
    pub description: String,
}

impl Constructor {
    pub fn new(
        kind: ConstructorKind,
        parameters: Vec<Parameter>,
        description: String,
    ) -> Result<Self, ParseError> {
        if kind != ConstructorKind::Custom && !parameters.is_empty() {
            return Err(ParseError::UnexpectedParameters {
                kind: kind.as_str(),
            });
        }
        Ok(Self {
            kind,
            parameters,
            description,
        })
    }

    pub fn kind(&self) -> ConstructorKind {
        self.kind
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// A destructor carries only its description; a class has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Destructor {
    pub description: String,
}

/// Access sections of a class. The parser's initial (default) section is
/// private; rendering and definition order is public, private, protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
    Protected,
}

impl Access {
    /// Rendering order.
    pub const ALL: [Access; 3] = [Self::Public, Self::Private, Self::Protected];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

/// One list per access section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTriple<T> {
    pub public: Vec<T>,
    pub private: Vec<T>,
    pub protected: Vec<T>,
}

impl<T> Default for AccessTriple<T> {
    fn default() -> Self {
        Self {
            public: Vec::new(),
            private: Vec::new(),
            protected: Vec::new(),
        }
    }
}

impl<T> AccessTriple<T> {
    pub fn get(&self, access: Access) -> &[T] {
        match access {
            Access::Public => &self.public,
            Access::Private => &self.private,
            Access::Protected => &self.protected,
        }
    }

    pub fn get_mut(&mut self, access: Access) -> &mut Vec<T> {
        match access {
            Access::Public => &mut self.public,
            Access::Private => &mut self.private,
            Access::Protected => &mut self.protected,
        }
    }

    /// Iterate every item in public-then-private-then-protected order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &T> {
        Access::ALL.into_iter().flat_map(|access| self.get(access))
    }

    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty() && self.protected.is_empty()
    }
}

/// A class: constructors, an optional destructor, methods and data members
/// per access section, and flags for generated assignment operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: SmolStr,
    pub description: String,
    pub constructors: Vec<Constructor>,
    pub destructor: Option<Destructor>,
    pub methods: AccessTriple<Method>,
    pub members: AccessTriple<Parameter>,
    pub copy_assignment: bool,
    pub move_assignment: bool,
}

impl Class {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            constructors: Vec::new(),
            destructor: None,
            methods: AccessTriple::default(),
            members: AccessTriple::default(),
            copy_assignment: false,
            move_assignment: false,
        }
    }
}
