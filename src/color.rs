//! Extension colors and display styles
//!
//! Every file extension hashes to a stable hue, so the same extension renders
//! with the same color in every run. Styles carry the computed color plus an
//! optional background highlight, leaving the markup to each renderer.

use std::collections::BTreeMap;

use termcolor::{Color, ColorSpec};

const DEFAULT_COLOR: &str = "#ffffff";

/// Deterministic `#rrggbb` color for an extension, case-insensitive.
pub fn color_for_extension(extension: &str) -> String {
    if extension.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    let hash = blake3::hash(extension.to_lowercase().as_bytes());
    let bytes = hash.as_bytes();
    let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let hue = (value % 360) as f64 / 360.0;
    let (r, g, b) = hsv_to_rgb(hue, 0.7, 0.95);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Parse a `#rrggbb` string into RGB components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Mapping from extension to display color, built once per run from the
/// extensions seen during the walk.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    colors: BTreeMap<String, String>,
}

impl ColorMap {
    pub fn from_extensions<I>(extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let colors = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().to_lowercase();
                let color = color_for_extension(&ext);
                (ext, color)
            })
            .collect();
        Self { colors }
    }

    /// Color for an extension, falling back to the default for unknown ones.
    pub fn get(&self, extension: &str) -> &str {
        self.colors
            .get(&extension.to_lowercase())
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Terminal color for an extension.
    pub fn terminal_color(&self, extension: &str) -> Color {
        let (r, g, b) = parse_hex(self.get(extension)).unwrap_or((0xff, 0xff, 0xff));
        Color::Rgb(r, g, b)
    }
}

/// A display style: foreground color, optional background highlight, bold.
/// Renderer-agnostic; the terminal renderer maps it onto a `ColorSpec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn to_color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(self.fg);
        spec.set_bg(self.bg);
        spec.set_bold(self.bold);
        spec
    }
}
