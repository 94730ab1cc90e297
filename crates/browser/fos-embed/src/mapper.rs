//! Settings Mapper
//!
//! Converts between embedder `BrowserSettings` and engine `WebPreferences`.
//! Both directions are total: unset embedder values become defaults and
//! nothing can fail.

use fos_prefs::{Platform, PreferenceDefaults, Url, WebPreferences};

use crate::{BrowserSettings, SettingString};

/// Engine flag that `BrowserSettings::javascript_disabled` is derived from
/// when mapping preferences back to settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JavascriptSource {
    /// `!javascript_enabled`
    #[default]
    JavascriptEnabled,
    /// `!java_enabled`, as older embedders derived it
    JavaEnabled,
}

/// Two-way mapping between browser settings and engine preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsMapper {
    defaults: PreferenceDefaults,
    javascript_source: JavascriptSource,
}

impl SettingsMapper {
    pub fn new(defaults: PreferenceDefaults) -> Self {
        Self {
            defaults,
            javascript_source: JavascriptSource::default(),
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(PreferenceDefaults::for_platform(platform))
    }

    pub fn with_javascript_source(mut self, source: JavascriptSource) -> Self {
        self.javascript_source = source;
        self
    }

    pub fn defaults(&self) -> &PreferenceDefaults {
        &self.defaults
    }

    pub fn javascript_source(&self) -> JavascriptSource {
        self.javascript_source
    }

    /// Build fully populated engine preferences from browser settings
    pub fn to_engine(&self, settings: &BrowserSettings) -> WebPreferences {
        let mut prefs = WebPreferences::default();
        self.apply_to_engine(settings, &mut prefs);
        prefs
    }

    /// Write browser settings into existing engine preferences.
    ///
    /// Every field is overwritten except `user_style_sheet_location`, which
    /// is only touched when the settings carry a location.
    pub fn apply_to_engine(&self, settings: &BrowserSettings, prefs: &mut WebPreferences) {
        let d = &self.defaults;

        prefs.standard_font_family =
            text_or(&settings.standard_font_family, d.standard_font_family);
        prefs.fixed_font_family = text_or(&settings.fixed_font_family, d.fixed_font_family);
        prefs.serif_font_family = text_or(&settings.serif_font_family, d.serif_font_family);
        prefs.sans_serif_font_family =
            text_or(&settings.sans_serif_font_family, d.sans_serif_font_family);
        prefs.cursive_font_family = text_or(&settings.cursive_font_family, d.cursive_font_family);
        prefs.fantasy_font_family = text_or(&settings.fantasy_font_family, d.fantasy_font_family);

        prefs.default_font_size = size_or(settings.default_font_size, d.default_font_size);
        prefs.default_fixed_font_size =
            size_or(settings.default_fixed_font_size, d.default_fixed_font_size);
        prefs.minimum_font_size = size_or(settings.minimum_font_size, d.minimum_font_size);
        prefs.minimum_logical_font_size =
            size_or(settings.minimum_logical_font_size, d.minimum_logical_font_size);

        prefs.default_encoding = text_or(&settings.default_encoding, d.default_encoding);

        prefs.javascript_enabled = !settings.javascript_disabled;
        prefs.web_security_enabled = !settings.web_security_disabled;
        prefs.javascript_can_open_windows_automatically =
            !settings.javascript_open_windows_disallowed;
        prefs.loads_images_automatically = !settings.image_load_disabled;
        prefs.plugins_enabled = !settings.plugins_disabled;
        prefs.dom_paste_enabled = !settings.dom_paste_disabled;
        prefs.site_specific_quirks_enabled = !settings.site_specific_quirks_disabled;
        prefs.shrinks_standalone_images_to_fit = settings.shrink_standalone_images_to_fit;
        prefs.uses_universal_detector = settings.encoding_detector_enabled;
        prefs.text_areas_are_resizable = !settings.text_area_resize_disabled;
        prefs.java_enabled = !settings.java_disabled;
        prefs.allow_scripts_to_close_windows = !settings.javascript_close_windows_disallowed;
        prefs.uses_page_cache = !settings.page_cache_disabled;
        prefs.remote_fonts_enabled = !settings.remote_fonts_disabled;
        prefs.javascript_can_access_clipboard = !settings.javascript_access_clipboard_disallowed;
        prefs.xss_auditor_enabled = settings.xss_auditor_enabled;
        prefs.local_storage_enabled = !settings.local_storage_disabled;
        prefs.databases_enabled = !settings.databases_disabled;
        prefs.application_cache_enabled = !settings.application_cache_disabled;
        prefs.tabs_to_links = !settings.tab_to_links_disabled;
        prefs.caret_browsing_enabled = settings.caret_browsing_enabled;
        prefs.hyperlink_auditing_enabled = !settings.hyperlink_auditing_disabled;

        prefs.user_style_sheet_enabled = settings.user_style_sheet_enabled;
        if let Some(location) = present(&settings.user_style_sheet_location) {
            prefs.user_style_sheet_location = parse_location(location);
        }

        prefs.author_and_user_styles_enabled = !settings.author_and_user_styles_disabled;
        prefs.allow_universal_access_from_file_urls =
            settings.universal_access_from_file_urls_allowed;
        prefs.allow_file_access_from_file_urls = settings.file_access_from_file_urls_allowed;
        prefs.experimental_webgl_enabled = settings.experimental_webgl_enabled;
        prefs.accelerated_compositing_enabled = !settings.accelerated_compositing_disabled;
        prefs.accelerated_2d_canvas_enabled = !settings.accelerated_2d_canvas_disabled;

        prefs.disable_engine_only_features();

        tracing::debug!(
            "Mapped browser settings to engine preferences (javascript: {}, encoding: {})",
            prefs.javascript_enabled,
            prefs.default_encoding
        );
    }

    /// Build browser settings reflecting the engine's preferences
    pub fn to_settings(&self, prefs: &WebPreferences) -> BrowserSettings {
        let mut settings = BrowserSettings::default();
        self.apply_to_settings(prefs, &mut settings);
        settings
    }

    /// Reset `settings` and fill it from engine preferences.
    ///
    /// Empty engine strings stay unset; font sizes are copied as-is.
    pub fn apply_to_settings(&self, prefs: &WebPreferences, settings: &mut BrowserSettings) {
        settings.reset();

        settings.standard_font_family = non_empty(&prefs.standard_font_family);
        settings.fixed_font_family = non_empty(&prefs.fixed_font_family);
        settings.serif_font_family = non_empty(&prefs.serif_font_family);
        settings.sans_serif_font_family = non_empty(&prefs.sans_serif_font_family);
        settings.cursive_font_family = non_empty(&prefs.cursive_font_family);
        settings.fantasy_font_family = non_empty(&prefs.fantasy_font_family);

        settings.default_font_size = Some(prefs.default_font_size);
        settings.default_fixed_font_size = Some(prefs.default_fixed_font_size);
        settings.minimum_font_size = Some(prefs.minimum_font_size);
        settings.minimum_logical_font_size = Some(prefs.minimum_logical_font_size);
        settings.remote_fonts_disabled = !prefs.remote_fonts_enabled;

        settings.default_encoding = non_empty(&prefs.default_encoding);
        settings.encoding_detector_enabled = prefs.uses_universal_detector;

        settings.javascript_disabled = match self.javascript_source {
            JavascriptSource::JavascriptEnabled => !prefs.javascript_enabled,
            JavascriptSource::JavaEnabled => {
                tracing::debug!("Deriving javascript_disabled from java_enabled (legacy mapping)");
                !prefs.java_enabled
            }
        };
        settings.javascript_open_windows_disallowed =
            !prefs.javascript_can_open_windows_automatically;
        settings.javascript_close_windows_disallowed = !prefs.allow_scripts_to_close_windows;
        settings.javascript_access_clipboard_disallowed = !prefs.javascript_can_access_clipboard;
        settings.dom_paste_disabled = !prefs.dom_paste_enabled;
        settings.caret_browsing_enabled = prefs.caret_browsing_enabled;
        settings.java_disabled = !prefs.java_enabled;
        settings.plugins_disabled = !prefs.plugins_enabled;
        settings.universal_access_from_file_urls_allowed =
            prefs.allow_universal_access_from_file_urls;
        settings.file_access_from_file_urls_allowed = prefs.allow_file_access_from_file_urls;
        settings.web_security_disabled = !prefs.web_security_enabled;
        settings.xss_auditor_enabled = prefs.xss_auditor_enabled;
        settings.image_load_disabled = !prefs.loads_images_automatically;
        settings.shrink_standalone_images_to_fit = prefs.shrinks_standalone_images_to_fit;
        settings.site_specific_quirks_disabled = !prefs.site_specific_quirks_enabled;
        settings.text_area_resize_disabled = !prefs.text_areas_are_resizable;
        settings.page_cache_disabled = !prefs.uses_page_cache;
        settings.tab_to_links_disabled = !prefs.tabs_to_links;
        settings.hyperlink_auditing_disabled = !prefs.hyperlink_auditing_enabled;
        settings.user_style_sheet_enabled = prefs.user_style_sheet_enabled;

        settings.user_style_sheet_location =
            prefs.user_style_sheet_location.as_ref().map(|url| SettingString::from(url.as_str()));

        settings.author_and_user_styles_disabled = !prefs.author_and_user_styles_enabled;
        settings.local_storage_disabled = !prefs.local_storage_enabled;
        settings.databases_disabled = !prefs.databases_enabled;
        settings.application_cache_disabled = !prefs.application_cache_enabled;
        settings.experimental_webgl_enabled = prefs.experimental_webgl_enabled;
        settings.accelerated_compositing_disabled = !prefs.accelerated_compositing_enabled;
        settings.accelerated_2d_canvas_disabled = !prefs.accelerated_2d_canvas_enabled;

        tracing::debug!("Mapped engine preferences to browser settings");
    }
}

/// Map settings with the defaults of the build platform
pub fn browser_to_web_settings(settings: &BrowserSettings) -> WebPreferences {
    SettingsMapper::default().to_engine(settings)
}

/// Map preferences back with the defaults of the build platform
pub fn web_to_browser_settings(prefs: &WebPreferences) -> BrowserSettings {
    SettingsMapper::default().to_settings(prefs)
}

fn present(value: &Option<SettingString>) -> Option<&SettingString> {
    value.as_ref().filter(|s| !s.is_empty())
}

fn text_or(value: &Option<SettingString>, default: &str) -> String {
    match present(value) {
        Some(s) => s.to_string_lossy(),
        None => default.to_string(),
    }
}

fn size_or(value: Option<i32>, default: i32) -> i32 {
    value.filter(|&size| size > 0).unwrap_or(default)
}

fn non_empty(value: &str) -> Option<SettingString> {
    (!value.is_empty()).then(|| SettingString::from(value))
}

fn parse_location(location: &SettingString) -> Option<Url> {
    let text = location.to_string_lossy();
    match Url::parse(&text) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Ignoring user style sheet location {:?}: {}", text, e);
            None
        }
    }
}
