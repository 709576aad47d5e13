//! The two configuration presets shipped with the project.
//!
//! Near-duplicates: the web preset carries class-based dark mode and
//! the `os`/`terminal` palettes, the dashboard preset does not.
//! Neither supersedes the other.

use indexmap::IndexMap;
use crate::config::{ColorGroup, DarkMode, TailwindConfig, TailwindTheme, TailwindThemeExtend};
use crate::defaults;
use crate::resolve::{merge_screens, splice_font_stack};

fn lengths(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn color_group(shades: &[(&str, &str)]) -> ColorGroup {
    shades
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn content_globs() -> Vec<String> {
    vec![
        "../../node/web/index.html".to_string(),
        "../wasm/templates/**/*.html".to_string(),
    ]
}

// Explicit breakpoints restated over the spread defaults; the override
// wins on every name even though the values coincide.
fn screens() -> IndexMap<String, String> {
    merge_screens(
        &defaults::screens(),
        &lengths(&[
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ]),
    )
}

fn font_family() -> IndexMap<String, Vec<String>> {
    let mut stacks = IndexMap::new();
    stacks.insert(
        "sans".to_string(),
        splice_font_stack("InterVariable", &defaults::font_family_sans()),
    );
    stacks
}

fn font_size() -> IndexMap<String, String> {
    lengths(&[("xxs", ".6rem")])
}

impl TailwindConfig {
    /// Preset for the web frontend: class-based dark mode plus the
    /// `os` and `terminal` palettes
    pub fn web_preset() -> Self {
        let mut colors = IndexMap::new();
        colors.insert(
            "os".to_string(),
            color_group(&[
                ("bg", "#f8fafc"),
                ("taskbar", "#f1f5f9"),
                ("accent", "#e2e8f0"),
                ("border", "#cbd5e1"),
                ("text", "#475569"),
            ]),
        );
        colors.insert(
            "terminal".to_string(),
            color_group(&[
                ("bg", "#0a1322"),
                ("taskbar", "#0f172a"),
                ("accent", "#1e293b"),
                ("border", "#00ff9580"),
                ("text", "#00ff95"),
                ("glow", "#00ff9520"),
            ]),
        );

        Self {
            content: content_globs(),
            dark_mode: Some(DarkMode::class_selector("[class='dark']")),
            theme: TailwindTheme {
                extend: TailwindThemeExtend {
                    colors,
                    font_family: font_family(),
                    font_size: font_size(),
                    screens: screens(),
                },
            },
            plugins: Vec::new(),
        }
    }

    /// Preset for the dashboard frontend: media-query dark mode, stock
    /// palette
    pub fn dashboard_preset() -> Self {
        Self {
            content: content_globs(),
            dark_mode: None,
            theme: TailwindTheme {
                extend: TailwindThemeExtend {
                    colors: IndexMap::new(),
                    font_family: font_family(),
                    font_size: font_size(),
                    screens: screens(),
                },
            },
            plugins: Vec::new(),
        }
    }
}
