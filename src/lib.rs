pub mod config;
pub mod defaults;
pub mod errors;
pub mod presets;
pub mod resolve;

pub use config::{ColorGroup, DarkMode, TailwindConfig, TailwindTheme, TailwindThemeExtend};
pub use errors::{ConfigError, Result};
pub use resolve::{merge_screens, splice_font_stack, ResolvedTheme};
