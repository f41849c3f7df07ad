//! Self-contained HTML exports
//!
//! The class names on the generated markup (`directory`, `file`,
//! `file-unique`, `directory-unique`, `pattern-info`, `legend`,
//! `legend-item`, `legend-color`, `legend-unique`) are a public contract for
//! downstream styling and tooling. Uniqueness classes come from the shared
//! diff tree, keyed by an explicit side tag per pane.

use crate::compare::{ComparisonResult, DiffNode, Side};
use crate::structure::{sort_files_by_type, DirectoryNode};

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn structure_list(node: &DirectoryNode, out: &mut String) {
    out.push_str("<ul>\n");
    for file in sort_files_by_type(&node.files) {
        out.push_str(&format!(
            "<li><span class=\"file\">📄 {}</span></li>\n",
            escape(&file)
        ));
    }
    for (name, sub) in &node.dirs {
        out.push_str(&format!(
            "<li><span class=\"directory\">📁 {}</span>\n",
            escape(name)
        ));
        structure_list(sub, out);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

/// Render a single structure as a standalone HTML document.
pub fn render_structure_html(structure: &DirectoryNode, root_name: &str) -> String {
    let mut tree = String::new();
    structure_list(structure, &mut tree);
    let root = escape(root_name);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>Directory Structure - {root}</title>\n"));
    out.push_str("<style>\n");
    out.push_str(
        "body { font-family: Arial, sans-serif; margin: 20px; }\n\
         ul { list-style-type: none; padding-left: 20px; }\n\
         .directory { color: #2c3e50; font-weight: bold; }\n\
         .file { color: #34495e; }\n",
    );
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!("<h1>📂 {root}</h1>\n"));
    out.push_str(&tree);
    out.push_str("</body>\n</html>\n");
    out
}

/// One pane of the comparison: only this side's entries, with uniqueness
/// classes taken from the merged diff.
fn pane_list(node: &DiffNode, side: Side, out: &mut String) {
    out.push_str("<ul>\n");
    for file in node.files.iter().filter(|f| f.presence.appears_on(side)) {
        let class = if file.presence.is_unique_to(side) {
            " class=\"file-unique\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<li{class}><span class=\"file\">📄 {}</span></li>\n",
            escape(&file.name)
        ));
    }
    for dir in node.dirs.iter().filter(|d| d.presence.appears_on(side)) {
        let class = if dir.presence.is_unique_to(side) {
            " class=\"directory-unique\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<li{class}><span class=\"directory\">📁 {}</span>\n",
            escape(&dir.name)
        ));
        pane_list(dir, side, out);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

fn pattern_info(result: &ComparisonResult) -> String {
    let patterns = &result.patterns;
    if patterns.is_empty() {
        return String::new();
    }
    let kind = {
        let name = patterns.kind.name();
        let mut c = name.chars();
        match c.next() {
            Some(first) => first.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    };

    let mut items = String::new();
    if !patterns.exclude.is_empty() {
        let list = patterns
            .exclude
            .iter()
            .map(|p| escape(p))
            .collect::<Vec<_>>()
            .join(", ");
        items.push_str(&format!(
            "<dt>Exclude {kind} Patterns:</dt><dd>{list}</dd>\n"
        ));
    }
    if !patterns.include.is_empty() {
        let list = patterns
            .include
            .iter()
            .map(|p| escape(p))
            .collect::<Vec<_>>()
            .join(", ");
        items.push_str(&format!(
            "<dt>Include {kind} Patterns:</dt><dd>{list}</dd>\n"
        ));
    }

    format!(
        "<div class=\"pattern-info\">\n<h3>Applied Patterns</h3>\n<dl>\n{items}</dl>\n</div>\n"
    )
}

const COMPARISON_CSS: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }\n\
.comparison-container { display: flex; border: 1px solid #ccc; }\n\
.directory-tree { flex: 1; padding: 15px; overflow: auto; border-right: 1px solid #ccc; }\n\
.directory-tree:last-child { border-right: none; }\n\
h1, h2 { text-align: center; }\n\
h3 { margin-top: 0; padding: 10px; background-color: #f0f0f0; border-bottom: 1px solid #ccc; }\n\
ul { list-style-type: none; padding-left: 20px; }\n\
.directory { color: #2c3e50; font-weight: bold; }\n\
.file { color: #34495e; }\n\
.file-unique { background-color: #fcf3cf; }\n\
.directory-unique { background-color: #fcf3cf; }\n\
.legend { margin-bottom: 20px; padding: 10px; background-color: #f8f9fa; border: 1px solid #ddd; border-radius: 4px; }\n\
.legend-item { display: inline-block; margin-right: 20px; }\n\
.legend-color { display: inline-block; width: 15px; height: 15px; margin-right: 5px; vertical-align: middle; }\n\
.legend-unique { background-color: #fcf3cf; }\n\
.pattern-info { margin-bottom: 20px; padding: 10px; background-color: #f0f8ff; border: 1px solid #add8e6; border-radius: 4px; }\n\
dt { font-weight: bold; margin-top: 10px; }\n\
dd { margin-left: 20px; margin-bottom: 10px; }\n";

/// Render a comparison as a standalone HTML document with two panes.
pub fn render_comparison_html(result: &ComparisonResult) -> String {
    let diff = result.diff();
    let left_name = escape(&result.left.name);
    let right_name = escape(&result.right.name);
    let left_path = escape(&result.left.path.display().to_string());
    let right_path = escape(&result.right.path.display().to_string());

    let mut left_tree = String::new();
    pane_list(&diff, Side::Left, &mut left_tree);
    let mut right_tree = String::new();
    pane_list(&diff, Side::Right, &mut right_tree);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Directory Comparison - {left_name} vs {right_name}</title>\n"
    ));
    out.push_str("<style>\n");
    out.push_str(COMPARISON_CSS);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>Directory Comparison</h1>\n");
    out.push_str(&pattern_info(result));
    out.push_str(
        "<div class=\"legend\">\n<div class=\"legend-item\">\n\
         <span class=\"legend-color legend-unique\"></span>\n\
         <span>Unique to this directory</span>\n</div>\n</div>\n",
    );
    out.push_str("<div class=\"comparison-container\">\n");
    out.push_str(&format!(
        "<div class=\"directory-tree\">\n<h3>📂 {left_name}</h3>\n<p><em>Path: {left_path}</em></p>\n"
    ));
    out.push_str(&left_tree);
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"directory-tree\">\n<h3>📂 {right_name}</h3>\n<p><em>Path: {right_path}</em></p>\n"
    ));
    out.push_str(&right_tree);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::SideInfo;
    use crate::filter::{FilterConfig, PatternKind};
    use std::path::PathBuf;

    fn node(files: &[&str]) -> DirectoryNode {
        DirectoryNode {
            files: files.iter().map(|f| f.to_string()).collect(),
            dirs: Default::default(),
        }
    }

    fn comparison(left: DirectoryNode, right: DirectoryNode) -> ComparisonResult {
        ComparisonResult {
            left: SideInfo {
                path: PathBuf::from("/l"),
                name: "l".to_string(),
                structure: left,
            },
            right: SideInfo {
                path: PathBuf::from("/r"),
                name: "r".to_string(),
                structure: right,
            },
            extensions: Default::default(),
            patterns: Default::default(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\"'d'"), "a&lt;b&gt;&amp;&quot;c&quot;&#x27;d&#x27;");
        assert_eq!(escape("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_single_structure_document() {
        let out = render_structure_html(&node(&["a.py"]), "proj<1>");
        assert!(out.contains("<title>Directory Structure - proj&lt;1&gt;</title>"));
        assert!(out.contains("<h1>📂 proj&lt;1&gt;</h1>"));
        assert!(out.contains("<li><span class=\"file\">📄 a.py</span></li>"));
        assert!(!out.contains("file-unique"));
    }

    #[test]
    fn test_unique_classes_per_pane() {
        let out = render_comparison_html(&comparison(
            node(&["a.py", "b.py"]),
            node(&["a.py", "c.py"]),
        ));

        // b.py is unique in the left pane, c.py in the right pane; a.py in
        // neither. Each pane shows only its own side's files.
        assert!(out.contains("<li class=\"file-unique\"><span class=\"file\">📄 b.py</span></li>"));
        assert!(out.contains("<li class=\"file-unique\"><span class=\"file\">📄 c.py</span></li>"));
        assert!(out.contains("<li><span class=\"file\">📄 a.py</span></li>"));
        assert_eq!(out.matches("📄 b.py").count(), 1);
        assert_eq!(out.matches("📄 c.py").count(), 1);
        assert_eq!(out.matches("📄 a.py").count(), 2);
    }

    #[test]
    fn test_unique_directory_class() {
        let mut left = node(&[]);
        left.dirs.insert("extra".to_string(), node(&["x.rs"]));
        let out = render_comparison_html(&comparison(left, node(&[])));
        assert!(out
            .contains("<li class=\"directory-unique\"><span class=\"directory\">📁 extra</span>"));
    }

    #[test]
    fn test_legend_and_contract_classes() {
        let out = render_comparison_html(&comparison(node(&[]), node(&[])));
        assert!(out.contains("class=\"legend\""));
        assert!(out.contains("class=\"legend-item\""));
        assert!(out.contains("class=\"legend-color legend-unique\""));
        assert!(out.contains("<span>Unique to this directory</span>"));
    }

    #[test]
    fn test_pattern_info_section() {
        let mut result = comparison(node(&[]), node(&[]));
        // The stylesheet always carries the .pattern-info rule; the section
        // itself must be absent without patterns.
        assert!(!render_comparison_html(&result).contains("class=\"pattern-info\""));

        result.patterns = FilterConfig::new()
            .with_exclude_patterns(&["*.py<".to_string()], PatternKind::Glob)
            .unwrap()
            .pattern_summary();
        let out = render_comparison_html(&result);
        assert!(out.contains("class=\"pattern-info\""));
        assert!(out.contains("<dt>Exclude Glob Patterns:</dt><dd>*.py&lt;</dd>"));
    }

    #[test]
    fn test_names_are_escaped_in_panes() {
        let out = render_comparison_html(&comparison(node(&["<script>.js"]), node(&[])));
        assert!(out.contains("&lt;script&gt;.js"));
        assert!(!out.contains("<script>.js"));
    }
}
