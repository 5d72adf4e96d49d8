//! Source-tree assembly: mapping a parsed project onto directories and files.
//!
//! The tree is an arena of directory nodes addressed by index; each node
//! stores its parent's index, so there is no cyclic ownership. File nodes are
//! a tagged enum over the three generated-file kinds (class, namespace,
//! function group) and rendering is an exhaustive match. Writing the tree to
//! disk and emitting build-system files are the concern of outer layers.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::codegen::{
    render_class_declaration, render_class_definition, render_function_declaration,
    render_function_definition, render_namespace_declaration, render_namespace_definition,
};
use crate::error::RenderError;
use crate::model::{Class, Folder, Function, Library, Namespace, Project};

/// Index of a directory node within its [`SourceTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId(usize);

/// One generated file: a class, a namespace, or a folder's grouped free
/// functions.
#[derive(Debug, Clone, PartialEq)]
pub enum FileNode {
    Class(Class),
    Namespace(Namespace),
    FunctionGroup {
        name: SmolStr,
        functions: Vec<Function>,
    },
}

impl FileNode {
    /// Base name of the generated file pair.
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => &class.name,
            Self::Namespace(namespace) => &namespace.name,
            Self::FunctionGroup { name, .. } => name,
        }
    }
}

/// A directory node: its name, parent link and contents.
#[derive(Debug, Clone, PartialEq)]
pub struct DirNode {
    pub name: SmolStr,
    pub parent: Option<DirId>,
    pub children: Vec<DirId>,
    pub files: Vec<FileNode>,
}

/// Declaration and definition text for one file node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub declaration: String,
    pub definition: String,
}

/// Per-library metadata collected while walking the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMeta {
    pub version: String,
    pub dependencies: Vec<SmolStr>,
}

/// Library metadata keyed by name, in declaration order. The project itself
/// is registered first under its own name.
pub type LibraryRegistry = IndexMap<SmolStr, LibraryMeta>;

/// The assembled directory tree. Node 0 is the project root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTree {
    dirs: Vec<DirNode>,
}

impl SourceTree {
    /// Assemble the tree for a parsed project.
    pub fn build(project: &Project) -> Self {
        let mut tree = Self { dirs: Vec::new() };
        let root = tree.push_dir(project.name().clone(), None);
        tree.add_folder_contents(&project.folder, root);
        for library in &project.libraries {
            let dir = tree.push_dir(library.name().clone(), Some(root));
            tree.add_folder_contents(&library.folder, dir);
        }
        tree
    }

    pub fn root(&self) -> DirId {
        DirId(0)
    }

    pub fn dir(&self, id: DirId) -> &DirNode {
        &self.dirs[id.0]
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterate every directory with its id, in creation (depth-first) order.
    pub fn iter(&self) -> impl Iterator<Item = (DirId, &DirNode)> {
        self.dirs.iter().enumerate().map(|(idx, dir)| (DirId(idx), dir))
    }

    fn push_dir(&mut self, name: SmolStr, parent: Option<DirId>) -> DirId {
        let id = DirId(self.dirs.len());
        self.dirs.push(DirNode {
            name,
            parent,
            children: Vec::new(),
            files: Vec::new(),
        });
        if let Some(parent) = parent {
            self.dirs[parent.0].children.push(id);
        }
        id
    }

    fn add_folder_contents(&mut self, folder: &Folder, dir: DirId) {
        for class in &folder.classes {
            self.dirs[dir.0].files.push(FileNode::Class(class.clone()));
        }
        for namespace in &folder.namespaces {
            self.dirs[dir.0]
                .files
                .push(FileNode::Namespace(namespace.clone()));
        }
        if !folder.functions.is_empty() {
            let name = self.dirs[dir.0].name.clone();
            self.dirs[dir.0].files.push(FileNode::FunctionGroup {
                name,
                functions: folder.functions.clone(),
            });
        }
        for nested in &folder.folders {
            let child = self.push_dir(nested.name.clone(), Some(dir));
            self.add_folder_contents(nested, child);
        }
    }
}

/// Render the declaration/definition text pair for one file node.
pub fn render_file(node: &FileNode) -> Result<FilePair, RenderError> {
    let pair = match node {
        FileNode::Class(class) => FilePair {
            declaration: render_class_declaration(class)?,
            definition: render_class_definition(class)?,
        },
        FileNode::Namespace(namespace) => FilePair {
            declaration: render_namespace_declaration(namespace)?,
            definition: render_namespace_definition(namespace)?,
        },
        FileNode::FunctionGroup { functions, .. } => {
            let mut declaration = String::new();
            let mut definition = String::new();
            for function in functions {
                if !declaration.is_empty() {
                    declaration.push('\n');
                    definition.push('\n');
                }
                declaration.push_str(&render_function_declaration(function)?);
                definition.push_str(&render_function_definition(function)?);
            }
            FilePair {
                declaration,
                definition,
            }
        }
    };
    Ok(pair)
}

/// Collect the library metadata registry for a project.
///
/// The registry is threaded through the walk as an explicit accumulator and
/// returned to the caller; nothing mutates shared state on the side.
pub fn collect_registry(project: &Project) -> LibraryRegistry {
    let registry = LibraryRegistry::new();
    let registry = register(
        registry,
        project.name().clone(),
        &project.version,
        &project.dependencies,
    );
    project.libraries.iter().fold(registry, |acc, library| {
        register_library(acc, library)
    })
}

fn register_library(registry: LibraryRegistry, library: &Library) -> LibraryRegistry {
    register(
        registry,
        library.name().clone(),
        &library.version,
        &library.dependencies,
    )
}

fn register(
    mut registry: LibraryRegistry,
    name: SmolStr,
    version: &str,
    dependencies: &[SmolStr],
) -> LibraryRegistry {
    registry.insert(
        name,
        LibraryMeta {
            version: version.to_owned(),
            dependencies: dependencies.to_vec(),
        },
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_project;

    fn project() -> Project {
        parse_project(
            "- project Game:\n\
             | version = 1.0.0\n\
             | dependency = engine\n\
             - class App:\n\
             _\n\
             - folder core:\n\
             - function start:\n\
             _\n\
             _\n\
             - library engine:\n\
             | version = 0.5.0\n\
             | dependency = audio, physics\n\
             - namespace gfx:\n\
             _\n\
             _\n\
             _",
        )
        .unwrap()
    }

    #[test]
    fn tree_maps_every_node_to_one_file() {
        let tree = SourceTree::build(&project());
        // Root, core, engine.
        assert_eq!(tree.len(), 3);
        let root = tree.dir(tree.root());
        assert_eq!(root.name, "Game");
        assert!(root.parent.is_none());
        assert_eq!(root.files.len(), 1);
        assert!(matches!(root.files[0], FileNode::Class(_)));

        let core = tree.dir(root.children[0]);
        assert_eq!(core.name, "core");
        assert_eq!(core.parent, Some(tree.root()));
        // All free functions of a folder share one file node.
        assert!(matches!(
            core.files[0],
            FileNode::FunctionGroup { ref name, .. } if name == "core"
        ));

        let engine = tree.dir(root.children[1]);
        assert_eq!(engine.name, "engine");
        assert!(matches!(engine.files[0], FileNode::Namespace(_)));
    }

    #[test]
    fn registry_preserves_declaration_order() {
        let registry = collect_registry(&project());
        let names: Vec<&str> = registry.keys().map(SmolStr::as_str).collect();
        assert_eq!(names, vec!["Game", "engine"]);
        let engine = &registry["engine"];
        assert_eq!(engine.version, "0.5.0");
        assert_eq!(engine.dependencies, vec!["audio", "physics"]);
    }

    #[test]
    fn file_pairs_render_through_codegen() {
        let tree = SourceTree::build(&project());
        let root = tree.dir(tree.root());
        let pair = render_file(&root.files[0]).unwrap();
        assert_eq!(pair.declaration, "class App {\npublic:\n};\n");
        assert_eq!(pair.definition, "");
    }
}
