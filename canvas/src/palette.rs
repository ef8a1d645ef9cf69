//! Theme colours for the field.
//!
//! Colours come from CSS custom properties on `<html>` so the field follows
//! the light/dark theme. They are read once at attach time and again whenever
//! the theme attribute changes, never per frame.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Custom property for resting dots.
pub const DOT_VAR: &str = "--text-subtle";
/// Custom property for dots near the pointer and the pointer glow.
pub const ACCENT_VAR: &str = "--accent";
/// Custom property for connection lines.
pub const LINE_VAR: &str = "--border-color";

const DEFAULT_DOT: &str = "#9ca3af";
const DEFAULT_ACCENT: &str = "#2563eb";
const DEFAULT_LINE: &str = "#d4d4d8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub dot: String,
    pub accent: String,
    pub line: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self { dot: DEFAULT_DOT.to_owned(), accent: DEFAULT_ACCENT.to_owned(), line: DEFAULT_LINE.to_owned() }
    }
}

impl Palette {
    /// Build from raw computed-style values, trimming whitespace and falling
    /// back per colour when a property is unset.
    #[must_use]
    pub fn from_values(dot: &str, accent: &str, line: &str) -> Self {
        Self { dot: pick(dot, DEFAULT_DOT), accent: pick(accent, DEFAULT_ACCENT), line: pick(line, DEFAULT_LINE) }
    }

    /// Read the current theme colours from the document root.
    ///
    /// Any missing piece of the environment yields the default palette.
    #[must_use]
    pub fn from_document() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return Self::default();
        };
        let style = match window.get_computed_style(&root) {
            Ok(Some(style)) => style,
            _ => return Self::default(),
        };
        let read = |name: &str| style.get_property_value(name).unwrap_or_default();
        Self::from_values(&read(DOT_VAR), &read(ACCENT_VAR), &read(LINE_VAR))
    }
}

fn pick(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}
