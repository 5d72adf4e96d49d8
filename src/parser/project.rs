//! Folder, library and project parsers.
//!
//! Three layered grammars over one recursive loop: a folder parses nested
//! folder/class/namespace/function blocks; a library is a folder that also
//! parses `version`/`dependency` properties; a project is a library that also
//! parses nested `library` blocks. Free functions declared directly in a
//! block all land in that block's folder (one generated file per group).

use smol_str::SmolStr;

use crate::base::{LineBuffer, LineKind, split_key_value, split_top_level};
use crate::error::ParseError;
use crate::model::{Folder, Library, Project};

use super::callable::parse_function_block;
use super::class::parse_class;
use super::namespace::{parse_namespace, require_ident};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Folder,
    Library,
    Project,
}

impl DirKind {
    fn block_name(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Library => "library",
            Self::Project => "project",
        }
    }
}

/// Accumulated contents of one directory-shaped block.
#[derive(Debug)]
struct DirParts {
    folder: Folder,
    version: String,
    dependencies: Vec<SmolStr>,
    libraries: Vec<Library>,
}

/// Parse the whole DSL source into a project.
///
/// The outermost block must be `- project <Name>:`; anything after the
/// project's end marker is skipped.
pub fn parse_project(source: &str) -> Result<Project, ParseError> {
    let mut buffer = LineBuffer::from_source(source);
    let line = buffer
        .pop()
        .ok_or(ParseError::UnexpectedEnd { block: "project" })?;
    let LineKind::Header { keyword, ident } = line.kind() else {
        return Err(ParseError::unexpected(&line.text, line.number));
    };
    if keyword != "project" {
        return Err(ParseError::UnknownKeyword {
            keyword: keyword.to_owned(),
            line: line.number,
        });
    }
    require_ident("project", ident, line.number)?;
    let parts = parse_dir_block(DirKind::Project, ident, &mut buffer)?;
    while let Some(rest) = buffer.pop() {
        tracing::debug!(line = %rest.text, number = rest.number, "skipping line after project block");
    }
    Ok(Project {
        folder: parts.folder,
        version: parts.version,
        dependencies: parts.dependencies,
        libraries: parts.libraries,
    })
}

/// Parse a folder block (header already consumed).
pub fn parse_folder(name: &str, buffer: &mut LineBuffer) -> Result<Folder, ParseError> {
    Ok(parse_dir_block(DirKind::Folder, name, buffer)?.folder)
}

/// Parse a library block (header already consumed).
pub fn parse_library(name: &str, buffer: &mut LineBuffer) -> Result<Library, ParseError> {
    let parts = parse_dir_block(DirKind::Library, name, buffer)?;
    Ok(Library {
        folder: parts.folder,
        version: parts.version,
        dependencies: parts.dependencies,
    })
}

fn parse_dir_block(
    kind: DirKind,
    name: &str,
    buffer: &mut LineBuffer,
) -> Result<DirParts, ParseError> {
    let mut parts = DirParts {
        folder: Folder::new(name),
        version: String::new(),
        dependencies: Vec::new(),
        libraries: Vec::new(),
    };
    let mut seen_content = false;
    loop {
        let line = buffer.pop().ok_or(ParseError::UnexpectedEnd {
            block: kind.block_name(),
        })?;
        match line.kind() {
            LineKind::End => {
                tracing::debug!(kind = kind.block_name(), name, "parsed block");
                return Ok(parts);
            }
            LineKind::Header { keyword, ident } => {
                match keyword {
                    "folder" => {
                        require_ident("folder", ident, line.number)?;
                        parts.folder.folders.push(parse_folder(ident, buffer)?);
                    }
                    "class" => {
                        require_ident("class", ident, line.number)?;
                        parts.folder.classes.push(parse_class(ident, buffer)?);
                    }
                    "namespace" => {
                        parts.folder.namespaces.push(parse_namespace(ident, buffer)?);
                    }
                    "function" => {
                        require_ident("function", ident, line.number)?;
                        parts.folder.functions.push(parse_function_block(ident, buffer)?);
                    }
                    "library" if kind == DirKind::Project => {
                        require_ident("library", ident, line.number)?;
                        parts.libraries.push(parse_library(ident, buffer)?);
                    }
                    "library" if kind == DirKind::Library => {
                        return Err(ParseError::NestedLibrary { line: line.number });
                    }
                    "project" => {
                        return Err(ParseError::NestedProject { line: line.number });
                    }
                    "method" => {
                        return Err(ParseError::MethodOutsideClass { line: line.number });
                    }
                    _ => {
                        return Err(ParseError::UnknownKeyword {
                            keyword: keyword.to_owned(),
                            line: line.number,
                        });
                    }
                }
                seen_content = true;
            }
            LineKind::Property { payload } => {
                let (key, value) = split_key_value(payload)
                    .ok_or(ParseError::MalformedProperty { line: line.number })?;
                match key {
                    "version" if kind != DirKind::Folder => {
                        parts.version = value.to_owned();
                    }
                    "dependency" if kind != DirKind::Folder => {
                        parts
                            .dependencies
                            .extend(split_top_level(value, ',').iter().filter_map(|dep| {
                                let dep = dep.trim();
                                (!dep.is_empty()).then(|| SmolStr::from(dep))
                            }));
                    }
                    _ => {
                        return Err(ParseError::UnknownProperty {
                            key: key.to_owned(),
                            block: kind.block_name(),
                            line: line.number,
                        });
                    }
                }
                seen_content = true;
            }
            LineKind::Other => {
                if !seen_content {
                    return Err(ParseError::unexpected(&line.text, line.number));
                }
                tracing::debug!(line = %line.text, number = line.number, "skipping trailing line");
            }
        }
    }
}
