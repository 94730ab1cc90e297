//! Embedder Strings
//!
//! Text crosses the embedding boundary as UTF-16 code units. Conversion to
//! engine strings is lossy rather than fallible.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// UTF-16 string owned by a settings record
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SettingString {
    units: Vec<u16>,
}

impl SettingString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw code units. Unpaired surrogates are kept as-is.
    pub fn from_utf16(units: Vec<u16>) -> Self {
        Self { units }
    }

    pub fn as_utf16(&self) -> &[u16] {
        &self.units
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode to UTF-8, replacing unpaired surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for SettingString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for SettingString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for SettingString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<SettingString> for String {
    fn from(s: SettingString) -> Self {
        s.to_string_lossy()
    }
}

impl fmt::Display for SettingString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for SettingString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
