//! JSON export of a single structure

use serde_json::json;

use crate::error::Result;
use crate::structure::DirectoryNode;

pub fn render_structure_json(structure: &DirectoryNode, root_name: &str) -> Result<String> {
    let doc = json!({
        "root": root_name,
        "structure": structure,
    });
    let mut out = serde_json::to_string_pretty(&doc).map_err(std::io::Error::from)?;
    out.push('\n');
    Ok(out)
}
