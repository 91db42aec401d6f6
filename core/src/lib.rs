//! libkorean-core
//!
//! Language-agnostic input method plumbing shared by Korean composition
//! engines (libhangul).
//!
//! Public API:
//! - `ComposingSink` / `SpanOp` - the provisional-text contract with the host
//! - `Composition` - a sink that also models the host document
//! - `ImeSession` - input mode and shift state across key events
//! - `Composer` - the seam a composition engine implements
//! - `ImeEngine` - routes key events between the session and a composer
//! - `Config` - configuration and feature flags
use serde::{Deserialize, Serialize};

pub mod sink;
pub use sink::{ComposingSink, SpanOp};

pub mod composition;
pub use composition::Composition;

pub mod session;
pub use session::{ImeSession, InputMode, ShiftState};

pub mod engine;
pub use engine::Composer;

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult};

/// Characters that end a word in the default configuration.
pub const DEFAULT_SEPARATORS: &str = " .,;:!?\n()[]*&@{}/<>_+=|\"'";

/// Generic configuration for IME core functionality.
///
/// This config contains only language-agnostic fields. Composition options
/// (cluster handling and so on) belong in `HangulConfig` in libhangul.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Characters that commit the composing syllable and pass through to the host
    pub separators: String,

    /// Release the shift variant after one letter has been typed with it
    pub one_shot_shift: bool,

    /// Start new sessions in Hangul mode (otherwise Latin passthrough)
    pub start_in_hangul: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_string(),
            one_shot_shift: true,
            start_in_hangul: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        use anyhow::Context;

        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check whether `ch` is a word separator.
    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(ch)
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize text to NFC.
    pub fn normalize(s: &str) -> String {
        s.nfc().collect()
    }

    /// Decompose text to NFD, splitting Hangul syllables into conjoining jamo.
    pub fn decompose(s: &str) -> String {
        s.nfd().collect()
    }
}
