//! Structure comparison and the merged diff tree
//!
//! `compare_directories` walks two roots with the same filters and keeps both
//! structures plus the union of their extensions. `diff` then merges the two
//! structures into a single `DiffNode` tree with a three-way classification
//! per entry; every sink (terminal view, txt export, HTML export) reads that
//! one tree, so they cannot disagree on what is unique.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::filter::{FilterConfig, PatternSummary};
use crate::structure::{sort_files_by_type, DirectoryNode};
use crate::walk::build_structure;

/// Which side of a comparison a pane or entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Three-way classification of a merged entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Both,
    LeftOnly,
    RightOnly,
}

impl Presence {
    pub fn only(side: Side) -> Self {
        match side {
            Side::Left => Presence::LeftOnly,
            Side::Right => Presence::RightOnly,
        }
    }

    /// True when the entry exists only on `side`.
    pub fn is_unique_to(self, side: Side) -> bool {
        self == Presence::only(side)
    }

    /// True when the entry exists on `side` at all.
    pub fn appears_on(self, side: Side) -> bool {
        self == Presence::Both || self == Presence::only(side)
    }
}

/// A file entry in the merged diff tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffFile {
    pub name: String,
    pub presence: Presence,
}

/// A directory entry in the merged diff tree. Files are sorted by type then
/// name, subdirectories lexicographically; that order is shared by every
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffNode {
    pub name: String,
    pub presence: Presence,
    pub files: Vec<DiffFile>,
    pub dirs: Vec<DiffNode>,
}

impl DiffNode {
    /// Relative paths of entries unique to `side`, for tests and tooling.
    pub fn unique_paths(&self, side: Side) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        self.collect_unique(side, "", &mut paths);
        paths
    }

    fn collect_unique(&self, side: Side, prefix: &str, paths: &mut BTreeSet<String>) {
        for file in &self.files {
            if file.presence.is_unique_to(side) {
                paths.insert(format!("{prefix}{}", file.name));
            }
        }
        for dir in &self.dirs {
            if dir.presence.is_unique_to(side) {
                paths.insert(format!("{prefix}{}", dir.name));
            }
            dir.collect_unique(side, &format!("{prefix}{}/", dir.name), paths);
        }
    }
}

/// Merge two structures into a single classified tree.
pub fn diff(left: &DirectoryNode, right: &DirectoryNode, name: &str) -> DiffNode {
    merge(left, right, name, Presence::Both)
}

fn merge(
    left: &DirectoryNode,
    right: &DirectoryNode,
    name: &str,
    presence: Presence,
) -> DiffNode {
    // Files pass: classify the union by membership on each side.
    let union: Vec<String> = {
        let mut names: BTreeSet<&String> = left.files.iter().collect();
        names.extend(right.files.iter());
        sort_files_by_type(&names.into_iter().cloned().collect::<Vec<_>>())
    };
    let files = union
        .into_iter()
        .map(|file| {
            let in_left = left.files.contains(&file);
            let in_right = right.files.contains(&file);
            let presence = match (in_left, in_right) {
                (true, true) => Presence::Both,
                (true, false) => Presence::LeftOnly,
                (false, true) => Presence::RightOnly,
                (false, false) => unreachable!("file came from one of the sides"),
            };
            DiffFile { name: file, presence }
        })
        .collect();

    // Subdirectory pass: lexicographic union of keys. A key missing on one
    // side recurses against an empty structure, marking the whole subtree.
    let empty = DirectoryNode::new();
    let mut keys: BTreeSet<&String> = left.dirs.keys().collect();
    keys.extend(right.dirs.keys());
    let dirs = keys
        .into_iter()
        .map(|key| {
            let left_sub = left.dirs.get(key);
            let right_sub = right.dirs.get(key);
            let presence = match (left_sub.is_some(), right_sub.is_some()) {
                (true, true) => Presence::Both,
                (true, false) => Presence::LeftOnly,
                (false, true) => Presence::RightOnly,
                (false, false) => unreachable!("key came from one of the sides"),
            };
            merge(
                left_sub.unwrap_or(&empty),
                right_sub.unwrap_or(&empty),
                key,
                presence,
            )
        })
        .collect();

    DiffNode {
        name: name.to_string(),
        presence,
        files,
        dirs,
    }
}

/// One side of a comparison: where it was rooted and what the walk found.
#[derive(Debug, Clone)]
pub struct SideInfo {
    pub path: PathBuf,
    pub name: String,
    pub structure: DirectoryNode,
}

/// The immutable result of comparing two roots: both filtered structures and
/// the union of their extensions.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub left: SideInfo,
    pub right: SideInfo,
    pub extensions: BTreeSet<String>,
    pub patterns: PatternSummary,
}

impl ComparisonResult {
    /// The merged diff tree, rooted at "Root".
    pub fn diff(&self) -> DiffNode {
        diff(&self.left.structure, &self.right.structure, "Root")
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Walk both roots with identical filters. Each walk is independent; a
/// missing or unreadable root yields an empty side rather than an error.
pub fn compare_directories(
    left_root: &Path,
    right_root: &Path,
    config: &FilterConfig,
) -> ComparisonResult {
    let (left_structure, left_extensions) = build_structure(left_root, config);
    let (right_structure, right_extensions) = build_structure(right_root, config);

    let mut extensions = left_extensions;
    extensions.extend(right_extensions);

    ComparisonResult {
        left: SideInfo {
            path: left_root.to_path_buf(),
            name: basename(left_root),
            structure: left_structure,
        },
        right: SideInfo {
            path: right_root.to_path_buf(),
            name: basename(right_root),
            structure: right_structure,
        },
        extensions,
        patterns: config.pattern_summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(files: &[&str], dirs: &[(&str, DirectoryNode)]) -> DirectoryNode {
        DirectoryNode {
            files: files.iter().map(|f| f.to_string()).collect(),
            dirs: dirs
                .iter()
                .map(|(name, node)| (name.to_string(), node.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_three_way_file_classification() {
        let left = node(&["a.py", "b.py"], &[]);
        let right = node(&["a.py", "c.py"], &[]);

        let merged = diff(&left, &right, "Root");
        let by_name: Vec<(&str, Presence)> = merged
            .files
            .iter()
            .map(|f| (f.name.as_str(), f.presence))
            .collect();
        assert_eq!(
            by_name,
            vec![
                ("a.py", Presence::Both),
                ("b.py", Presence::LeftOnly),
                ("c.py", Presence::RightOnly),
            ]
        );
    }

    #[test]
    fn test_partition_no_double_classification() {
        let left = node(&["x.rs", "shared.rs"], &[]);
        let right = node(&["y.rs", "shared.rs"], &[]);
        let merged = diff(&left, &right, "Root");

        // Every file in the union appears exactly once, with one class.
        assert_eq!(merged.files.len(), 3);
        let left_only = merged.unique_paths(Side::Left);
        let right_only = merged.unique_paths(Side::Right);
        assert!(left_only.is_disjoint(&right_only));
        assert_eq!(left_only, BTreeSet::from(["x.rs".to_string()]));
        assert_eq!(right_only, BTreeSet::from(["y.rs".to_string()]));
    }

    #[test]
    fn test_symmetry_of_unique_sets() {
        let left = node(&["a.py"], &[("sub", node(&["deep.txt"], &[]))]);
        let right = node(&["b.py"], &[("other", node(&["far.txt"], &[]))]);

        let forward = diff(&left, &right, "Root");
        let swapped = diff(&right, &left, "Root");

        assert_eq!(
            forward.unique_paths(Side::Left),
            swapped.unique_paths(Side::Right)
        );
        assert_eq!(
            forward.unique_paths(Side::Right),
            swapped.unique_paths(Side::Left)
        );
    }

    #[test]
    fn test_missing_subtree_is_marked_all_the_way_down() {
        let left = node(&[], &[("sub", node(&["deep.rs"], &[]))]);
        let right = node(&[], &[]);

        let merged = diff(&left, &right, "Root");
        let sub = &merged.dirs[0];
        assert_eq!(sub.presence, Presence::LeftOnly);
        assert_eq!(sub.files[0].presence, Presence::LeftOnly);
    }

    #[test]
    fn test_empty_side() {
        let left = node(&["a.rs"], &[("src", node(&["b.rs"], &[]))]);
        let right = DirectoryNode::new();

        let merged = diff(&left, &right, "Root");
        assert_eq!(
            merged.unique_paths(Side::Left),
            BTreeSet::from(["a.rs".to_string(), "src".to_string(), "src/b.rs".to_string()])
        );
        assert!(merged.unique_paths(Side::Right).is_empty());
    }

    #[test]
    fn test_dirs_sorted_lexicographically() {
        let left = node(&[], &[("zeta", node(&[], &[])), ("alpha", node(&[], &[]))]);
        let right = node(&[], &[("mid", node(&[], &[]))]);
        let merged = diff(&left, &right, "Root");
        let names: Vec<&str> = merged.dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_presence_helpers() {
        assert!(Presence::LeftOnly.is_unique_to(Side::Left));
        assert!(!Presence::LeftOnly.is_unique_to(Side::Right));
        assert!(Presence::Both.appears_on(Side::Left));
        assert!(Presence::Both.appears_on(Side::Right));
        assert!(!Presence::RightOnly.appears_on(Side::Left));
        assert_eq!(Side::Left.other(), Side::Right);
    }
}
