//! Rendering sinks for structures and comparisons
//!
//! - `render` - colored terminal output (single tree and side-by-side diff)
//! - `text` - plain-text exports with box-drawing trees
//! - `html` - self-contained HTML exports
//! - `json` - JSON export of a single structure
//! - `markdown` - Markdown export of a single structure
//!
//! The format dispatchers below validate the requested format before touching
//! the output path, so an unsupported format never leaves a partial file.

mod html;
mod json;
mod markdown;
mod render;
mod text;

use std::path::Path;

use crate::compare::ComparisonResult;
use crate::error::{Error, Result};
use crate::structure::DirectoryNode;

pub use html::{render_comparison_html, render_structure_html};
pub use render::{print_comparison, print_structure};
pub use text::{render_comparison_text, render_structure_text};

/// Export a single directory structure. Supported formats: `txt`, `json`,
/// `html`, `md`.
pub fn export_structure(
    structure: &DirectoryNode,
    root_name: &str,
    format: &str,
    output_path: &Path,
) -> Result<()> {
    let rendered = match format.to_lowercase().as_str() {
        "txt" => text::render_structure_text(structure, root_name),
        "json" => json::render_structure_json(structure, root_name)?,
        "html" => html::render_structure_html(structure, root_name),
        "md" => markdown::render_structure_markdown(structure, root_name),
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };
    std::fs::write(output_path, rendered)?;
    Ok(())
}

/// Export a comparison. Supported formats: `txt`, `html`.
pub fn export_comparison(
    result: &ComparisonResult,
    format: &str,
    output_path: &Path,
) -> Result<()> {
    let rendered = match format.to_lowercase().as_str() {
        "txt" => text::render_comparison_text(result),
        "html" => html::render_comparison_html(result),
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };
    std::fs::write(output_path, rendered)?;
    Ok(())
}
