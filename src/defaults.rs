//! Stock default theme values the build tool supplies.
//!
//! Extensions are layered onto these; only the slices this crate needs
//! for resolution are reproduced here.

use indexmap::IndexMap;

/// Default `sans` font stack, in fallback order. Names containing
/// spaces keep their embedded quotes, matching the build tool's own
/// serialized form.
pub const FONT_FAMILY_SANS: [&str; 7] = [
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
    "\"Segoe UI Symbol\"",
    "\"Noto Color Emoji\"",
];

/// Default breakpoint names and lengths, smallest first
pub const SCREENS: [(&str, &str); 5] = [
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

/// Default `sans` stack as an owned sequence
pub fn font_family_sans() -> Vec<String> {
    FONT_FAMILY_SANS.iter().map(|s| s.to_string()).collect()
}

/// Default breakpoint set as an ordered mapping
pub fn screens() -> IndexMap<String, String> {
    SCREENS
        .iter()
        .map(|(name, length)| (name.to_string(), length.to_string()))
        .collect()
}
