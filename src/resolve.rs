//! Theme resolution: overlaying extensions onto the default theme.

use indexmap::IndexMap;
use crate::config::{ColorGroup, TailwindConfig, TailwindThemeExtend};
use crate::defaults;

/// Overlay an explicit breakpoint set onto a default set.
///
/// Default keys keep their original order and take the override's value
/// on collision; override-only keys are appended in declaration order.
/// This reproduces the "spread defaults, then override" semantics of
/// the build tool's theme merge.
pub fn merge_screens(
    defaults: &IndexMap<String, String>,
    overrides: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut effective = IndexMap::with_capacity(defaults.len() + overrides.len());

    for (name, length) in defaults {
        let value = overrides.get(name).unwrap_or(length);
        effective.insert(name.clone(), value.clone());
    }

    for (name, length) in overrides {
        if !defaults.contains_key(name) {
            effective.insert(name.clone(), length.clone());
        }
    }

    effective
}

/// Prepend a custom font name to a default stack.
///
/// The default stack's internal order is kept intact; nothing is
/// dropped or reordered.
pub fn splice_font_stack(custom: &str, default_stack: &[String]) -> Vec<String> {
    let mut stack = Vec::with_capacity(default_stack.len() + 1);
    stack.push(custom.to_string());
    stack.extend(default_stack.iter().cloned());
    stack
}

/// Effective theme values after resolution against the default theme
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Custom color groups (additive; the default palette is untouched)
    pub colors: IndexMap<String, ColorGroup>,

    /// Effective font stacks; `sans` falls back to the default stack
    /// when not extended
    pub font_family: IndexMap<String, Vec<String>>,

    /// Custom font size tokens
    pub font_size: IndexMap<String, String>,

    /// Effective breakpoint set
    pub screens: IndexMap<String, String>,
}

impl TailwindThemeExtend {
    /// Resolve these extensions against the default theme
    pub fn resolve(&self) -> ResolvedTheme {
        let mut font_family = self.font_family.clone();
        if !font_family.contains_key("sans") {
            font_family.insert("sans".to_string(), defaults::font_family_sans());
        }

        ResolvedTheme {
            colors: self.colors.clone(),
            font_family,
            font_size: self.font_size.clone(),
            screens: merge_screens(&defaults::screens(), &self.screens),
        }
    }
}

impl TailwindConfig {
    /// Resolve this configuration's theme extensions against the
    /// default theme
    pub fn resolve_theme(&self) -> ResolvedTheme {
        self.theme.extend.resolve()
    }
}
