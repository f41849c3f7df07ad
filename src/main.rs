//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use canopy::{
    build_structure, compare_directories, export_comparison, export_structure, print_comparison,
    print_structure, ColorMap, FilterConfig, PatternKind,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Visualize and compare directory trees with filtering and colored output")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Directory names to exclude (can be used multiple times)
    #[arg(short = 'e', long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// File extensions to exclude, with or without the leading dot
    #[arg(short = 'x', long = "exclude-ext", value_name = "EXT")]
    exclude_extensions: Vec<String>,

    /// Patterns to exclude (glob by default, regex with --regex)
    #[arg(short = 'p', long = "exclude-pattern", value_name = "PATTERN")]
    exclude_patterns: Vec<String>,

    /// Patterns to include, overriding exclusions
    #[arg(short = 'i', long = "include-pattern", value_name = "PATTERN")]
    include_patterns: Vec<String>,

    /// Treat patterns as regular expressions instead of globs
    #[arg(long)]
    regex: bool,

    /// Honor a gitignore-style ignore file with this name (e.g. .gitignore)
    #[arg(long = "ignore-file", value_name = "NAME")]
    ignore_file: Option<String>,
}

impl FilterArgs {
    fn to_config(&self) -> canopy::Result<FilterConfig> {
        let kind = if self.regex {
            PatternKind::Regex
        } else {
            PatternKind::Glob
        };
        let mut config = FilterConfig::new()
            .with_exclude_dirs(self.exclude_dirs.clone())
            .with_exclude_extensions(&self.exclude_extensions)
            .with_exclude_patterns(&self.exclude_patterns, kind)?
            .with_include_patterns(&self.include_patterns, kind)?;
        if let Some(ref name) = self.ignore_file {
            config = config.with_ignore_file(name.clone());
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display a directory tree with per-extension colors
    Show {
        /// Directory to display
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Export a directory tree to txt, json, html, or md
    Export {
        /// Directory to export
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Export format: txt, json, html, or md
        #[arg(short, long)]
        format: String,

        /// Path of the file to write
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Compare two directory trees side by side
    Compare {
        /// Left directory
        left: PathBuf,

        /// Right directory
        right: PathBuf,

        /// Export the comparison instead of displaying it: txt or html
        #[arg(short, long, requires = "output")]
        format: Option<String>,

        /// Path of the file to write (with --format)
        #[arg(short, long, requires = "format")]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CANOPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let use_color = should_use_color(cli.color);

    let result = match cli.command {
        Command::Show { path, filters } => run_show(&path, &filters, use_color),
        Command::Export {
            path,
            format,
            output,
            filters,
        } => run_export(&path, &format, &output, &filters),
        Command::Compare {
            left,
            right,
            format,
            output,
            filters,
        } => run_compare(&left, &right, format.as_deref(), output.as_deref(), &filters, use_color),
    };

    if let Err(e) = result {
        eprintln!("canopy: {e}");
        process::exit(1);
    }
}

fn run_show(path: &Path, filters: &FilterArgs, use_color: bool) -> canopy::Result<()> {
    let config = filters.to_config()?;
    let (structure, extensions) = build_structure(path, &config);
    let color_map = ColorMap::from_extensions(&extensions);
    print_structure(&structure, &root_name(path), &color_map, use_color)?;
    Ok(())
}

fn run_export(
    path: &Path,
    format: &str,
    output: &Path,
    filters: &FilterArgs,
) -> canopy::Result<()> {
    let config = filters.to_config()?;
    let (structure, _) = build_structure(path, &config);
    export_structure(&structure, &root_name(path), format, output)?;
    println!("Exported to {}", output.display());
    Ok(())
}

fn run_compare(
    left: &Path,
    right: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    filters: &FilterArgs,
    use_color: bool,
) -> canopy::Result<()> {
    let config = filters.to_config()?;
    let result = compare_directories(left, right, &config);

    match (format, output) {
        (Some(format), Some(output)) => {
            export_comparison(&result, format, output)?;
            println!("Exported to {}", output.display());
        }
        _ => print_comparison(&result, use_color)?,
    }
    Ok(())
}
