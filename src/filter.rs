//! Filter configuration for directory walks
//!
//! Holds everything the walker consults when deciding whether an entry makes
//! it into the structure: excluded directory names, normalized extension
//! exclusions, compiled exclude/include patterns, and the name of an optional
//! gitignore-style ignore file. Patterns are compiled once and reused for
//! both sides of a comparison.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{Error, Result};

/// How pattern strings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternKind {
    #[default]
    Glob,
    Regex,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Glob => "glob",
            PatternKind::Regex => "regex",
        }
    }
}

#[derive(Debug, Clone)]
enum Compiled {
    Glob(Vec<glob::Pattern>),
    Regex(Vec<Regex>),
}

/// A set of exclude or include patterns, compiled up front.
#[derive(Debug, Clone)]
pub struct PatternSet {
    kind: PatternKind,
    sources: Vec<String>,
    compiled: Compiled,
}

impl PatternSet {
    /// Compile `patterns` as globs or regexes according to `kind`.
    pub fn compile(patterns: &[String], kind: PatternKind) -> Result<Self> {
        let compiled = match kind {
            PatternKind::Glob => Compiled::Glob(
                patterns
                    .iter()
                    .map(|p| {
                        glob::Pattern::new(p).map_err(|e| Error::InvalidPattern {
                            kind: "glob",
                            pattern: p.clone(),
                            message: e.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            PatternKind::Regex => Compiled::Regex(
                patterns
                    .iter()
                    .map(|p| {
                        Regex::new(p).map_err(|e| Error::InvalidPattern {
                            kind: "regex",
                            pattern: p.clone(),
                            message: e.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        Ok(Self {
            kind,
            sources: patterns.to_vec(),
            compiled,
        })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The literal pattern strings, for display in legends and exports.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// True if any pattern matches the entry name or its root-relative path.
    pub fn matches(&self, name: &str, rel_path: &str) -> bool {
        match &self.compiled {
            Compiled::Glob(globs) => globs
                .iter()
                .any(|p| p.matches(name) || p.matches(rel_path)),
            Compiled::Regex(regexes) => regexes
                .iter()
                .any(|r| r.is_match(name) || r.is_match(rel_path)),
        }
    }
}

/// Normalize an extension for comparison: lowercase, leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Literal pattern strings plus their kind, carried into exports and legends.
#[derive(Debug, Clone, Default)]
pub struct PatternSummary {
    pub kind: PatternKind,
    pub exclude: Vec<String>,
    pub include: Vec<String>,
}

impl PatternSummary {
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.include.is_empty()
    }
}

/// Filter configuration applied identically to every walked root.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub exclude_dirs: Vec<String>,
    pub exclude_extensions: BTreeSet<String>,
    pub exclude_patterns: Option<PatternSet>,
    pub include_patterns: Option<PatternSet>,
    pub ignore_file: Option<String>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.exclude_dirs = dirs;
        self
    }

    /// Set extension exclusions; each is normalized to lowercase with a
    /// leading dot.
    pub fn with_exclude_extensions<I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.exclude_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: &[String], kind: PatternKind) -> Result<Self> {
        if !patterns.is_empty() {
            self.exclude_patterns = Some(PatternSet::compile(patterns, kind)?);
        }
        Ok(self)
    }

    pub fn with_include_patterns(mut self, patterns: &[String], kind: PatternKind) -> Result<Self> {
        if !patterns.is_empty() {
            self.include_patterns = Some(PatternSet::compile(patterns, kind)?);
        }
        Ok(self)
    }

    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = Some(name.into());
        self
    }

    /// Should this entry be dropped by the pattern filters?
    ///
    /// Include patterns override exclude patterns when both match.
    pub fn excluded_by_patterns(&self, name: &str, rel_path: &str) -> bool {
        let excluded = self
            .exclude_patterns
            .as_ref()
            .is_some_and(|p| p.matches(name, rel_path));
        if !excluded {
            return false;
        }
        !self
            .include_patterns
            .as_ref()
            .is_some_and(|p| p.matches(name, rel_path))
    }

    pub fn pattern_summary(&self) -> PatternSummary {
        let kind = self
            .exclude_patterns
            .as_ref()
            .or(self.include_patterns.as_ref())
            .map(|p| p.kind())
            .unwrap_or_default();
        PatternSummary {
            kind,
            exclude: self
                .exclude_patterns
                .as_ref()
                .map(|p| p.sources().to_vec())
                .unwrap_or_default(),
            include: self
                .include_patterns
                .as_ref()
                .map(|p| p.sources().to_vec())
                .unwrap_or_default(),
        }
    }
}
