//! Plain-text export with box-drawing trees
//!
//! The comparison export lays both sides out as two columns. It deliberately
//! carries no uniqueness marks: each side is its own full filtered tree, and
//! the reader diffs visually. Output is byte-identical across runs for the
//! same pair of structures.

use crate::compare::ComparisonResult;
use crate::structure::{sort_files_by_type, DirectoryNode};

const RULE_WIDTH: usize = 80;
const COLUMN_MARGIN: usize = 4;

/// Render one structure as a box-drawing tree, rooted at `📂 root_name`.
pub fn render_structure_text(structure: &DirectoryNode, root_name: &str) -> String {
    let mut out = tree_lines(structure, root_name).join("\n");
    out.push('\n');
    out
}

fn tree_lines(structure: &DirectoryNode, root_name: &str) -> Vec<String> {
    let mut lines = vec![format!("📂 {root_name}")];
    append_tree_lines(structure, "", &mut lines);
    lines
}

/// Files first (type-then-name order), then subdirectories (lexicographic);
/// the same order as every other sink.
fn append_tree_lines(node: &DirectoryNode, prefix: &str, lines: &mut Vec<String>) {
    let files = sort_files_by_type(&node.files);
    let entry_count = files.len() + node.dirs.len();

    for (i, file) in files.iter().enumerate() {
        let connector = if i + 1 == entry_count { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}📄 {file}"));
    }

    for (i, (name, sub)) in node.dirs.iter().enumerate() {
        let is_last = files.len() + i + 1 == entry_count;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}📁 {name}"));
        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        append_tree_lines(sub, &child_prefix, lines);
    }
}

/// Render a comparison: header block, then the two sides' trees as columns
/// separated by ` | `, the left column padded to its widest line plus a
/// fixed margin.
pub fn render_comparison_text(result: &ComparisonResult) -> String {
    let left_lines = tree_lines(&result.left.structure, &result.left.name);
    let right_lines = tree_lines(&result.right.structure, &result.right.name);

    let mut lines = vec![
        "Directory Comparison:".to_string(),
        "=".repeat(RULE_WIDTH),
        format!("Left: {}", result.left.path.display()),
        format!("Right: {}", result.right.path.display()),
    ];

    let patterns = &result.patterns;
    if !patterns.is_empty() {
        lines.push("-".repeat(RULE_WIDTH));
        if !patterns.exclude.is_empty() {
            lines.push(format!(
                "Exclude {} patterns: {}",
                patterns.kind.name(),
                patterns.exclude.join(", ")
            ));
        }
        if !patterns.include.is_empty() {
            lines.push(format!(
                "Include {} patterns: {}",
                patterns.kind.name(),
                patterns.include.join(", ")
            ));
        }
    }
    lines.push("=".repeat(RULE_WIDTH));

    let column_width = left_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_MARGIN;

    for i in 0..left_lines.len().max(right_lines.len()) {
        let left = left_lines.get(i).map(String::as_str).unwrap_or("");
        let right = right_lines.get(i).map(String::as_str).unwrap_or("");
        lines.push(format!("{left:<column_width$} | {right}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
