//! Directory structure representation
//!
//! A `DirectoryNode` holds the filtered contents of one directory: the file
//! names directly inside it and its subdirectories, keyed by name. Files and
//! subdirectories live in separate fields, so a directory named like any
//! internal marker can never collide with the file list.

use std::collections::BTreeMap;

use serde::Serialize;

/// One directory's filtered contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    /// File names directly in this directory. Unordered as collected;
    /// renderers sort with [`sort_files_by_type`].
    pub files: Vec<String>,
    /// Subdirectories keyed by name, iterated in lexicographic order.
    pub dirs: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when this directory holds no files and no subdirectories.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Total number of files in this node and all subdirectories.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.dirs.values().map(DirectoryNode::file_count).sum::<usize>()
    }

    /// Total number of subdirectories, recursively.
    pub fn dir_count(&self) -> usize {
        self.dirs.len() + self.dirs.values().map(DirectoryNode::dir_count).sum::<usize>()
    }
}

/// Lowercased extension of a file name, with the leading dot.
///
/// Returns `None` for names without an extension (including dotfiles like
/// `.gitignore`, whose whole name is the "extension" in path terms but which
/// carry no meaningful type).
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// Sort file names by extension, then case-insensitively by name.
///
/// Extensionless files sort before any extension, matching an empty-string
/// extension key.
pub fn sort_files_by_type(files: &[String]) -> Vec<String> {
    let mut sorted: Vec<String> = files.to_vec();
    sorted.sort_by_key(|f| (extension_of(f).unwrap_or_default(), f.to_lowercase()));
    sorted
}
