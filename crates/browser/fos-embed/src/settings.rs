//! Browser Settings
//!
//! The embedder-facing settings record. Strings and font sizes are
//! optional; unset values fall back to engine defaults when mapped. Most
//! toggles are named for the negative condition so that `false`, the
//! default, leaves the feature on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::SettingString;

/// Settings loading error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-browser settings supplied by the embedder
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    // Fonts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serif_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sans_serif_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursive_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_font_family: Option<SettingString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_fixed_font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_logical_font_size: Option<i32>,
    /// Do not load web fonts
    pub remote_fonts_disabled: bool,

    // Encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_encoding: Option<SettingString>,
    /// Detect the encoding from content
    pub encoding_detector_enabled: bool,

    // Scripting
    pub javascript_disabled: bool,
    pub javascript_open_windows_disallowed: bool,
    pub javascript_close_windows_disallowed: bool,
    pub javascript_access_clipboard_disallowed: bool,
    pub dom_paste_disabled: bool,

    // Content
    pub caret_browsing_enabled: bool,
    pub java_disabled: bool,
    pub plugins_disabled: bool,
    pub image_load_disabled: bool,
    pub shrink_standalone_images_to_fit: bool,
    pub site_specific_quirks_disabled: bool,
    pub text_area_resize_disabled: bool,
    pub page_cache_disabled: bool,
    pub tab_to_links_disabled: bool,
    pub hyperlink_auditing_disabled: bool,

    // Security
    pub universal_access_from_file_urls_allowed: bool,
    pub file_access_from_file_urls_allowed: bool,
    pub web_security_disabled: bool,
    pub xss_auditor_enabled: bool,

    // Styles
    pub user_style_sheet_enabled: bool,
    /// URL of the user style sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_style_sheet_location: Option<SettingString>,
    pub author_and_user_styles_disabled: bool,

    // Storage
    pub local_storage_disabled: bool,
    pub databases_disabled: bool,
    pub application_cache_disabled: bool,

    // Graphics
    pub experimental_webgl_enabled: bool,
    pub accelerated_compositing_disabled: bool,
    pub accelerated_2d_canvas_disabled: bool,
}

impl BrowserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its unset state, dropping owned strings
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse settings from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        tracing::debug!("Loaded browser settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
