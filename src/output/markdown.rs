//! Markdown export of a single structure

use crate::structure::{sort_files_by_type, DirectoryNode};

pub fn render_structure_markdown(structure: &DirectoryNode, root_name: &str) -> String {
    let mut lines = vec![format!("# 📂 {root_name}"), String::new()];
    append_md_lines(structure, 0, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn append_md_lines(node: &DirectoryNode, level: usize, lines: &mut Vec<String>) {
    let indent = "    ".repeat(level);
    for file in sort_files_by_type(&node.files) {
        lines.push(format!("{indent}- 📄 `{file}`"));
    }
    for (name, sub) in &node.dirs {
        lines.push(format!("{indent}- 📁 **{name}**"));
        append_md_lines(sub, level + 1, lines);
    }
}
