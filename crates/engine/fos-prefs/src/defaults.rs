//! Built-in Preference Defaults
//!
//! The values the engine falls back to when the embedder leaves a font
//! or encoding setting unset. Only the cursive and fantasy families
//! depend on the platform.

/// Platform identity used to pick platform-specific defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS and other Apple targets
    Apple,
    /// Everything else
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub const fn current() -> Self {
        if cfg!(target_vendor = "apple") {
            Self::Apple
        } else {
            Self::Other
        }
    }

    /// Parse a platform name (`apple`/`macos` or `other`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "apple" | "macos" | "mac" => Some(Self::Apple),
            "other" | "linux" | "windows" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Other => "other",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Immutable default table for font and encoding preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceDefaults {
    pub standard_font_family: &'static str,
    pub fixed_font_family: &'static str,
    pub serif_font_family: &'static str,
    pub sans_serif_font_family: &'static str,
    pub cursive_font_family: &'static str,
    pub fantasy_font_family: &'static str,
    pub default_font_size: i32,
    pub default_fixed_font_size: i32,
    pub minimum_font_size: i32,
    pub minimum_logical_font_size: i32,
    pub default_encoding: &'static str,
}

impl PreferenceDefaults {
    /// Defaults for Apple platforms
    pub const APPLE: Self = Self::common("Apple Chancery", "Papyrus");

    /// Defaults for every other platform
    pub const OTHER: Self = Self::common("Comic Sans MS", "Impact");

    const fn common(cursive: &'static str, fantasy: &'static str) -> Self {
        Self {
            standard_font_family: "Times",
            fixed_font_family: "Courier",
            serif_font_family: "Times",
            sans_serif_font_family: "Helvetica",
            cursive_font_family: cursive,
            fantasy_font_family: fantasy,
            default_font_size: 16,
            default_fixed_font_size: 13,
            minimum_font_size: 1,
            minimum_logical_font_size: 9,
            default_encoding: "ISO-8859-1",
        }
    }

    /// Pick the table for a platform
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Apple => Self::APPLE,
            Platform::Other => Self::OTHER,
        }
    }
}

impl Default for PreferenceDefaults {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_defaults() {
        for platform in [Platform::Apple, Platform::Other] {
            let defaults = PreferenceDefaults::for_platform(platform);
            assert_eq!(defaults.standard_font_family, "Times");
            assert_eq!(defaults.fixed_font_family, "Courier");
            assert_eq!(defaults.serif_font_family, "Times");
            assert_eq!(defaults.sans_serif_font_family, "Helvetica");
            assert_eq!(defaults.default_font_size, 16);
            assert_eq!(defaults.default_fixed_font_size, 13);
            assert_eq!(defaults.minimum_font_size, 1);
            assert_eq!(defaults.minimum_logical_font_size, 9);
            assert_eq!(defaults.default_encoding, "ISO-8859-1");
        }
    }

    #[test]
    fn test_platform_specific_families() {
        let apple = PreferenceDefaults::for_platform(Platform::Apple);
        assert_eq!(apple.cursive_font_family, "Apple Chancery");
        assert_eq!(apple.fantasy_font_family, "Papyrus");

        let other = PreferenceDefaults::for_platform(Platform::Other);
        assert_eq!(other.cursive_font_family, "Comic Sans MS");
        assert_eq!(other.fantasy_font_family, "Impact");
    }

    #[test]
    fn test_current_platform() {
        let expected = if cfg!(target_vendor = "apple") {
            Platform::Apple
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
        assert_eq!(PreferenceDefaults::default(), PreferenceDefaults::for_platform(expected));
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(Platform::from_name("MacOS"), Some(Platform::Apple));
        assert_eq!(Platform::from_name("other"), Some(Platform::Other));
        assert_eq!(Platform::from_name("beos"), None);
        assert_eq!(Platform::from_name(Platform::Apple.name()), Some(Platform::Apple));
    }
}
