use serde::{Deserialize, Serialize};

/// Hangul-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libkorean_core::Config` (flattened via serde)
/// - Whether initial consonants may fuse into clusters
///
/// # Example
///
/// ```rust
/// use libhangul::HangulConfig;
///
/// let config = HangulConfig::from_toml_str("lead_clusters = false").unwrap();
/// assert!(!config.lead_clusters);
/// assert!(config.base().one_shot_shift);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HangulConfig {
    /// Base configuration fields (separators, shift, start mode)
    #[serde(flatten)]
    pub base: libkorean_core::Config,

    /// Fuse two initial consonants into a cluster (ㄱ+ㅅ→ㄳ) before a vowel
    /// arrives. The cluster splits again once the vowel is typed.
    pub lead_clusters: bool,
}

impl Default for HangulConfig {
    fn default() -> Self {
        Self {
            base: libkorean_core::Config::default(),
            lead_clusters: true,
        }
    }
}

impl HangulConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Convert this hangul config into the base config for use with `ImeEngine`
    pub fn into_base(self) -> libkorean_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libkorean_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libkorean_core::Config {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HangulConfig::default();
        assert!(config.lead_clusters);
        assert_eq!(config.base(), &libkorean_core::Config::default());
    }

    #[test]
    fn test_flattened_toml() {
        let text = "lead_clusters = false\none_shot_shift = false\nseparators = \" .\"\n";
        let config = HangulConfig::from_toml_str(text).unwrap();
        assert!(!config.lead_clusters);
        assert!(!config.base.one_shot_shift);
        assert!(config.base.start_in_hangul);
        assert_eq!(config.into_base().separators, " .");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(HangulConfig::from_toml_str("").unwrap(), HangulConfig::default());
    }

    #[test]
    fn test_base_mut() {
        let mut config = HangulConfig::default();
        config.base_mut().start_in_hangul = false;
        assert!(!config.base().start_in_hangul);
    }

    #[test]
    fn test_load_toml() {
        let path = std::env::temp_dir().join(format!("libhangul_config_{}.toml", std::process::id()));
        std::fs::write(&path, "lead_clusters = false\n").unwrap();
        let config = HangulConfig::load_toml(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(!config.lead_clusters);
    }
}
