//! fOS Embedding Layer
//!
//! Browser settings as an embedder supplies them, and the mapping that
//! turns them into the rendering engine's preferences and back.
//!
//! # Example
//! ```rust
//! use fos_embed::{BrowserSettings, Platform, SettingsMapper};
//!
//! let settings = BrowserSettings {
//!     javascript_disabled: true,
//!     default_font_size: Some(18),
//!     ..Default::default()
//! };
//!
//! let mapper = SettingsMapper::for_platform(Platform::Other);
//! let prefs = mapper.to_engine(&settings);
//! assert!(!prefs.javascript_enabled);
//! assert_eq!(prefs.default_font_size, 18);
//! assert_eq!(prefs.standard_font_family, "Times");
//!
//! let back = mapper.to_settings(&prefs);
//! assert!(back.javascript_disabled);
//! ```

mod mapper;
mod settings;
mod string;

pub use mapper::{
    JavascriptSource, SettingsMapper, browser_to_web_settings, web_to_browser_settings,
};
pub use settings::{BrowserSettings, SettingsError};
pub use string::SettingString;

// Engine-side types
pub use fos_prefs::{InspectorSettings, Platform, PreferenceDefaults, WebPreferences};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
