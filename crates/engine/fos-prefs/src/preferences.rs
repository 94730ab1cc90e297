//! Engine Preferences
//!
//! The record the rendering engine reads its behaviour from. Flags are
//! always positive-sense and, once populated by the embedder layer, every
//! font and encoding string is non-empty.

use serde::{Deserialize, Serialize};
use url::Url;

/// Persisted inspector key/value pairs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InspectorSettings(Vec<(String, String)>);

impl InspectorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value for the key
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Rendering engine preferences
///
/// `Default` yields the unpopulated record: empty strings, zero sizes and
/// every flag off.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPreferences {
    // Fonts
    pub standard_font_family: String,
    pub fixed_font_family: String,
    pub serif_font_family: String,
    pub sans_serif_font_family: String,
    pub cursive_font_family: String,
    pub fantasy_font_family: String,
    pub default_font_size: i32,
    pub default_fixed_font_size: i32,
    pub minimum_font_size: i32,
    pub minimum_logical_font_size: i32,

    /// Encoding label used when a document declares none
    pub default_encoding: String,
    /// Guess the encoding from content instead of using `default_encoding`
    pub uses_universal_detector: bool,

    // Scripting
    pub javascript_enabled: bool,
    pub javascript_can_open_windows_automatically: bool,
    pub allow_scripts_to_close_windows: bool,
    pub javascript_can_access_clipboard: bool,
    pub dom_paste_enabled: bool,

    // Content
    pub loads_images_automatically: bool,
    pub shrinks_standalone_images_to_fit: bool,
    pub plugins_enabled: bool,
    pub java_enabled: bool,
    pub remote_fonts_enabled: bool,
    pub site_specific_quirks_enabled: bool,
    pub text_areas_are_resizable: bool,
    pub caret_browsing_enabled: bool,
    pub tabs_to_links: bool,
    pub hyperlink_auditing_enabled: bool,

    // Security
    pub web_security_enabled: bool,
    pub xss_auditor_enabled: bool,
    pub allow_universal_access_from_file_urls: bool,
    pub allow_file_access_from_file_urls: bool,

    // Storage
    pub uses_page_cache: bool,
    pub local_storage_enabled: bool,
    pub databases_enabled: bool,
    pub application_cache_enabled: bool,

    // Styles
    pub user_style_sheet_enabled: bool,
    pub user_style_sheet_location: Option<Url>,
    pub author_and_user_styles_enabled: bool,

    // Graphics
    pub experimental_webgl_enabled: bool,
    pub accelerated_compositing_enabled: bool,
    pub accelerated_2d_canvas_enabled: bool,

    // Engine-only, never driven by the embedder
    pub developer_extras_enabled: bool,
    pub memory_info_enabled: bool,
    pub show_composited_layer_borders: bool,
    pub inspector_settings: InspectorSettings,
}

impl WebPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn off the debugging features the embedder cannot control
    pub fn disable_engine_only_features(&mut self) {
        self.developer_extras_enabled = false;
        self.memory_info_enabled = false;
        self.show_composited_layer_borders = false;
        self.inspector_settings.clear();
    }

    /// True once every font family and the default encoding are set
    pub fn is_populated(&self) -> bool {
        [
            &self.standard_font_family,
            &self.fixed_font_family,
            &self.serif_font_family,
            &self.sans_serif_font_family,
            &self.cursive_font_family,
            &self.fantasy_font_family,
            &self.default_encoding,
        ]
        .iter()
        .all(|s| !s.is_empty())
    }
}
