//! fOS Preferences
//!
//! Engine-side preferences and the built-in defaults the embedder layer
//! falls back to.
//!
//! # Example
//! ```rust
//! use fos_prefs::{Platform, PreferenceDefaults, WebPreferences};
//!
//! let defaults = PreferenceDefaults::for_platform(Platform::Other);
//! assert_eq!(defaults.fantasy_font_family, "Impact");
//!
//! let prefs = WebPreferences::default();
//! assert!(!prefs.is_populated());
//! ```

mod defaults;
mod preferences;

pub use defaults::{Platform, PreferenceDefaults};
pub use preferences::{InspectorSettings, WebPreferences};

/// Re-exported so consumers can build style sheet locations
pub use url::Url;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
