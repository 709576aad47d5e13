use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::errors::{ConfigError, Result};

/// A palette group: shade name mapped to a color value.
///
/// Values are passed through as-is; 8-digit hex encodes alpha in the
/// last byte and is not interpreted here.
pub type ColorGroup = IndexMap<String, String>;

/// Tailwind configuration
///
/// Field order and serialized key spellings match the shape the build
/// tool's theme-resolution step consumes (`darkMode`, `theme.extend`,
/// `fontFamily`, ...). Mapping order is insertion order throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Content paths to scan, in scan order
    pub content: Vec<String>,

    /// Dark mode strategy; absent means the media-query default
    #[serde(rename = "darkMode", skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkMode>,

    /// Theme configuration
    pub theme: TailwindTheme,

    /// Plugin references, passed through untouched
    pub plugins: Vec<serde_json::Value>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            dark_mode: None,
            theme: TailwindTheme::default(),
            plugins: Vec::new(),
        }
    }
}

/// Dark mode activation strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DarkMode {
    /// Bare strategy tag, e.g. `"class"`
    Strategy(String),

    /// Strategy tag with an explicit activation selector,
    /// e.g. `["class", "[class='dark']"]`
    Selector(String, String),
}

impl DarkMode {
    /// Class-based activation driven by the given selector
    pub fn class_selector(selector: &str) -> Self {
        DarkMode::Selector("class".to_string(), selector.to_string())
    }
}

/// Theme configuration for Tailwind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindTheme {
    /// Theme extensions
    pub extend: TailwindThemeExtend,
}

impl Default for TailwindTheme {
    fn default() -> Self {
        Self {
            extend: TailwindThemeExtend::default(),
        }
    }
}

/// Theme extensions
///
/// Additive customization layered onto the build tool's default theme;
/// unspecified defaults stay in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TailwindThemeExtend {
    /// Custom color groups
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, ColorGroup>,

    /// Custom font stacks, fallback order preserved
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub font_family: IndexMap<String, Vec<String>>,

    /// Custom font size tokens
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub font_size: IndexMap<String, String>,

    /// Breakpoint overrides, overlaid onto the default set
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub screens: IndexMap<String, String>,
}

impl Default for TailwindThemeExtend {
    fn default() -> Self {
        Self {
            colors: IndexMap::new(),
            font_family: IndexMap::new(),
            font_size: IndexMap::new(),
            screens: IndexMap::new(),
        }
    }
}

impl TailwindConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Serialize to the build tool's JSON shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = TailwindConfig::default();
        assert!(config.content.is_empty());
        assert!(config.dark_mode.is_none());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
content:
  - "./src/**/*.html"
  - "./templates/**/*.html"
theme:
  extend:
    colors:
      brand:
        bg: "#f8fafc"
        text: "#475569"
    fontSize:
      xxs: ".6rem"
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.content.len(), 2);
        let brand = config.theme.extend.colors.get("brand").unwrap();
        assert_eq!(brand.get("bg"), Some(&"#f8fafc".to_string()));
        assert_eq!(
            config.theme.extend.font_size.get("xxs"),
            Some(&".6rem".to_string())
        );
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "content": ["./dist/**/*.html"],
  "darkMode": ["class", "[class='dark']"],
  "theme": {
    "extend": {
      "screens": {
        "sm": "640px"
      }
    }
  },
  "plugins": []
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.content.len(), 1);
        assert_eq!(
            config.dark_mode,
            Some(DarkMode::class_selector("[class='dark']"))
        );
        assert_eq!(
            config.theme.extend.screens.get("sm"),
            Some(&"640px".to_string())
        );
    }

    #[test]
    fn test_unsupported_format() {
        let result = TailwindConfig::from_file(Path::new("tailwind.config.js"));
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_dark_mode_bare_tag() {
        let config: TailwindConfig =
            serde_json::from_str(r#"{"content": [], "darkMode": "class"}"#).unwrap();
        assert_eq!(
            config.dark_mode,
            Some(DarkMode::Strategy("class".to_string()))
        );

        let json = config.to_json().unwrap();
        assert!(json.contains(r#""darkMode":"class""#));
    }

    #[test]
    fn test_dark_mode_absent_is_skipped() {
        let config = TailwindConfig::default();
        let json = config.to_json().unwrap();
        assert!(!json.contains("darkMode"));
    }
}
