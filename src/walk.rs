//! Directory walking: builds a `DirectoryNode` from the filesystem
//!
//! Read failures are absorbed, not raised: an unreadable or missing root
//! yields an empty structure so comparisons and exports keep working on
//! whatever could be seen.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, warn};

use crate::filter::FilterConfig;
use crate::structure::{extension_of, DirectoryNode};

/// Walk `root` with the given filters and return the structure plus the set
/// of (lowercased, dot-prefixed) extensions seen.
pub fn build_structure(root: &Path, config: &FilterConfig) -> (DirectoryNode, BTreeSet<String>) {
    let mut extensions = BTreeSet::new();
    let mut ignores: Vec<Gitignore> = Vec::new();
    let node = walk_dir(root, root, config, &mut ignores, &mut extensions);
    (node, extensions)
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    config: &FilterConfig,
    ignores: &mut Vec<Gitignore>,
    extensions: &mut BTreeSet<String>,
) -> DirectoryNode {
    let mut node = DirectoryNode::new();

    let pushed_ignore = push_ignore_file(dir, config, ignores);

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read directory, treating as empty");
            if pushed_ignore {
                ignores.pop();
            }
            return node;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();

        // Skip symlinks to prevent traversal loops
        if path.is_symlink() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let is_dir = path.is_dir();

        if is_dir && config.exclude_dirs.iter().any(|d| d == &name) {
            debug!(name = %name, "excluded directory name");
            continue;
        }

        if ignored_by_stack(ignores, &path, is_dir) {
            debug!(path = %path.display(), "excluded by ignore file");
            continue;
        }

        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();

        if config.excluded_by_patterns(&name, &rel_path) {
            debug!(path = %rel_path, "excluded by pattern");
            continue;
        }

        if is_dir {
            let sub = walk_dir(&path, root, config, ignores, extensions);
            node.dirs.insert(name, sub);
        } else {
            let ext = extension_of(&name);
            if let Some(ref ext) = ext {
                if config.exclude_extensions.contains(ext) {
                    continue;
                }
                extensions.insert(ext.clone());
            }
            node.files.push(name);
        }
    }

    if pushed_ignore {
        ignores.pop();
    }
    node
}

/// If this directory carries the configured ignore file, compile it and push
/// it onto the stack. Returns whether a file was pushed.
fn push_ignore_file(dir: &Path, config: &FilterConfig, ignores: &mut Vec<Gitignore>) -> bool {
    let Some(ref ignore_name) = config.ignore_file else {
        return false;
    };
    let ignore_path = dir.join(ignore_name);
    if !ignore_path.is_file() {
        return false;
    }

    let mut builder = GitignoreBuilder::new(dir);
    if let Some(e) = builder.add(&ignore_path) {
        warn!(path = %ignore_path.display(), error = %e, "failed to parse ignore file");
        return false;
    }
    match builder.build() {
        Ok(gitignore) => {
            ignores.push(gitignore);
            true
        }
        Err(e) => {
            warn!(path = %ignore_path.display(), error = %e, "failed to build ignore matcher");
            false
        }
    }
}

/// Check a path against the stack of ignore files, deepest first. A
/// whitelist (`!pattern`) match in a deeper file overrides an ignore in a
/// shallower one.
fn ignored_by_stack(ignores: &[Gitignore], path: &Path, is_dir: bool) -> bool {
    for gitignore in ignores.iter().rev() {
        match gitignore.matched(path, is_dir) {
            ignore::Match::Ignore(_) => return true,
            ignore::Match::Whitelist(_) => return false,
            ignore::Match::None => {}
        }
    }
    false
}
