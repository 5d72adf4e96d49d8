//! Directory-shaped containers: folder ⊂ library ⊂ project.

use smol_str::SmolStr;

use super::callable::Function;
use super::class::Class;
use super::namespace::Namespace;

/// A folder maps onto one generated directory. All free functions declared
/// directly in a folder share one generated file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: SmolStr,
    pub folders: Vec<Folder>,
    pub classes: Vec<Class>,
    pub namespaces: Vec<Namespace>,
    pub functions: Vec<Function>,
}

impl Folder {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            folders: Vec::new(),
            classes: Vec::new(),
            namespaces: Vec::new(),
            functions: Vec::new(),
        }
    }
}

/// A library: a folder plus version and dependency metadata. Libraries never
/// nest inside libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub folder: Folder,
    pub version: String,
    pub dependencies: Vec<SmolStr>,
}

impl Library {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            folder: Folder::new(name),
            version: String::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.folder.name
    }
}

/// The outermost container: a folder plus version, dependencies and the
/// project's libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub folder: Folder,
    pub version: String,
    pub dependencies: Vec<SmolStr>,
    pub libraries: Vec<Library>,
}

impl Project {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            folder: Folder::new(name),
            version: String::new(),
            dependencies: Vec::new(),
            libraries: Vec::new(),
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.folder.name
    }
}
