//! Colored terminal rendering
//!
//! The comparison view shows both sides of the merged diff in two columns.
//! Each pane lists its own side's entries first, then the entries that exist
//! only on the other side, so either pane alone tells the full story. Entries
//! unique to the left get a green background, entries unique to the right a
//! red one, in both panes.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

use crate::color::{ColorMap, Style};
use crate::compare::{ComparisonResult, DiffFile, DiffNode, Presence, Side};
use crate::structure::{extension_of, sort_files_by_type, DirectoryNode};

const COLUMN_MARGIN: usize = 4;

/// One styled run of text.
struct Span {
    text: String,
    style: Style,
}

type Line = Vec<Span>;

fn span(text: impl Into<String>, style: Style) -> Span {
    Span {
        text: text.into(),
        style,
    }
}

fn line_width(line: &Line) -> usize {
    line.iter().map(|s| s.text.chars().count()).sum()
}

fn dir_style() -> Style {
    Style::fg(Color::Blue).with_bold()
}

fn file_style(name: &str, color_map: &ColorMap) -> Style {
    let ext = extension_of(name).unwrap_or_default();
    Style::fg(color_map.terminal_color(&ext))
}

fn highlight_for(presence: Presence) -> Option<Color> {
    match presence {
        Presence::Both => None,
        Presence::LeftOnly => Some(Color::Green),
        Presence::RightOnly => Some(Color::Red),
    }
}

fn apply_highlight(mut style: Style, presence: Presence) -> Style {
    style.bg = highlight_for(presence);
    style
}

fn write_line(out: &mut dyn WriteColor, line: &Line) -> io::Result<()> {
    for span in line {
        out.set_color(&span.style.to_color_spec())?;
        write!(out, "{}", span.text)?;
    }
    out.reset()?;
    writeln!(out)
}

/// Lines for a single structure: root, then files, then subdirectories.
fn structure_lines(structure: &DirectoryNode, root_name: &str, color_map: &ColorMap) -> Vec<Line> {
    let mut lines = vec![vec![span(format!("📂 {root_name}"), Style::bold())]];
    append_structure_lines(structure, color_map, "", &mut lines);
    lines
}

fn append_structure_lines(
    node: &DirectoryNode,
    color_map: &ColorMap,
    prefix: &str,
    lines: &mut Vec<Line>,
) {
    let files = sort_files_by_type(&node.files);
    let entry_count = files.len() + node.dirs.len();

    for (i, file) in files.iter().enumerate() {
        let connector = if i + 1 == entry_count { "└── " } else { "├── " };
        lines.push(vec![
            span(format!("{prefix}{connector}"), Style::plain()),
            span(format!("📄 {file}"), file_style(file, color_map)),
        ]);
    }
    for (i, (name, sub)) in node.dirs.iter().enumerate() {
        let is_last = files.len() + i + 1 == entry_count;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(vec![
            span(format!("{prefix}{connector}"), Style::plain()),
            span(format!("📁 {name}"), dir_style()),
        ]);
        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        append_structure_lines(sub, color_map, &child_prefix, lines);
    }
}

/// Display one directory tree with per-extension colors.
pub fn print_structure(
    structure: &DirectoryNode,
    root_name: &str,
    color_map: &ColorMap,
    use_color: bool,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_structure(&mut stdout, structure, root_name, color_map)
}

fn write_structure(
    out: &mut dyn WriteColor,
    structure: &DirectoryNode,
    root_name: &str,
    color_map: &ColorMap,
) -> io::Result<()> {
    for line in structure_lines(structure, root_name, color_map) {
        write_line(out, &line)?;
    }
    Ok(())
}

enum PaneEntry<'a> {
    File(&'a DiffFile),
    Dir(&'a DiffNode),
}

/// Entries of one pane, in render order: this side's files, this side's
/// subdirectories, then the files and subdirectories that exist only on the
/// other side.
fn pane_entries<'a>(node: &'a DiffNode, side: Side) -> Vec<PaneEntry<'a>> {
    let other = side.other();
    let mut entries: Vec<PaneEntry<'a>> = Vec::new();
    entries.extend(
        node.files
            .iter()
            .filter(|f| f.presence.appears_on(side))
            .map(PaneEntry::File),
    );
    entries.extend(
        node.dirs
            .iter()
            .filter(|d| d.presence.appears_on(side))
            .map(PaneEntry::Dir),
    );
    entries.extend(
        node.files
            .iter()
            .filter(|f| f.presence.is_unique_to(other))
            .map(PaneEntry::File),
    );
    entries.extend(
        node.dirs
            .iter()
            .filter(|d| d.presence.is_unique_to(other))
            .map(PaneEntry::Dir),
    );
    entries
}

fn pane_lines(diff: &DiffNode, side: Side, root_name: &str, color_map: &ColorMap) -> Vec<Line> {
    let mut lines = vec![vec![span(format!("📂 {root_name}"), Style::bold())]];
    append_pane_lines(diff, side, color_map, "", &mut lines);
    lines
}

fn append_pane_lines(
    node: &DiffNode,
    side: Side,
    color_map: &ColorMap,
    prefix: &str,
    lines: &mut Vec<Line>,
) {
    let entries = pane_entries(node, side);
    let entry_count = entries.len();

    for (i, entry) in entries.into_iter().enumerate() {
        let is_last = i + 1 == entry_count;
        let connector = if is_last { "└── " } else { "├── " };
        match entry {
            PaneEntry::File(file) => {
                let style = apply_highlight(file_style(&file.name, color_map), file.presence);
                lines.push(vec![
                    span(format!("{prefix}{connector}"), Style::plain()),
                    span(format!("📄 {}", file.name), style),
                ]);
            }
            PaneEntry::Dir(dir) => {
                let style = apply_highlight(dir_style(), dir.presence);
                lines.push(vec![
                    span(format!("{prefix}{connector}"), Style::plain()),
                    span(format!("📁 {}", dir.name), style),
                ]);
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                append_pane_lines(dir, side, color_map, &child_prefix, lines);
            }
        }
    }
}

fn legend_line() -> Line {
    vec![
        span("Legend: ", Style::bold()),
        span("Green background", Style::plain().with_bg(Color::Green)),
        span(" = Only in left directory, ", Style::plain()),
        span("Red background", Style::plain().with_bg(Color::Red)),
        span(" = Only in right directory", Style::plain()),
    ]
}

/// Display a comparison: pattern panel (when patterns were supplied), legend,
/// and both panes side by side.
pub fn print_comparison(result: &ComparisonResult, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_comparison(&mut stdout, result)
}

fn write_comparison(out: &mut dyn WriteColor, result: &ComparisonResult) -> io::Result<()> {
    let color_map = ColorMap::from_extensions(&result.extensions);
    let diff = result.diff();

    let patterns = &result.patterns;
    if !patterns.is_empty() {
        write_line(out, &vec![span("Applied Patterns:", Style::bold())])?;
        if !patterns.exclude.is_empty() {
            let text = format!(
                "  Exclude {} patterns: {}",
                patterns.kind.name(),
                patterns.exclude.join(", ")
            );
            write_line(out, &vec![span(text, Style::plain())])?;
        }
        if !patterns.include.is_empty() {
            let text = format!(
                "  Include {} patterns: {}",
                patterns.kind.name(),
                patterns.include.join(", ")
            );
            write_line(out, &vec![span(text, Style::plain())])?;
        }
    }

    write_line(out, &legend_line())?;

    let left_lines = pane_lines(&diff, Side::Left, &result.left.name, &color_map);
    let right_lines = pane_lines(&diff, Side::Right, &result.right.name, &color_map);

    let column_width = left_lines.iter().map(line_width).max().unwrap_or(0) + COLUMN_MARGIN;
    let empty: Line = Vec::new();

    for i in 0..left_lines.len().max(right_lines.len()) {
        let left = left_lines.get(i).unwrap_or(&empty);
        let right = right_lines.get(i).unwrap_or(&empty);

        for span in left {
            out.set_color(&span.style.to_color_spec())?;
            write!(out, "{}", span.text)?;
        }
        out.reset()?;
        let pad = column_width.saturating_sub(line_width(left));
        write!(out, "{} │ ", " ".repeat(pad))?;
        for span in right {
            out.set_color(&span.style.to_color_spec())?;
            write!(out, "{}", span.text)?;
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
