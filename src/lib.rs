//! Canopy - visualize and compare directory trees

pub mod color;
pub mod compare;
pub mod error;
pub mod filter;
pub mod output;
pub mod structure;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use color::{color_for_extension, ColorMap, Style};
pub use compare::{
    compare_directories, diff, ComparisonResult, DiffFile, DiffNode, Presence, Side,
};
pub use error::{Error, Result};
pub use filter::{FilterConfig, PatternKind, PatternSet, PatternSummary};
pub use output::{
    export_comparison, export_structure, print_comparison, print_structure,
    render_comparison_html, render_comparison_text, render_structure_html, render_structure_text,
};
pub use structure::{sort_files_by_type, DirectoryNode};
pub use walk::build_structure;
