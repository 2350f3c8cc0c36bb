use serde::Deserialize;
use std::path::Path;

/// Tunables for header parsing and integrity verification.
///
/// Every field has a default, so an empty TOML document is a valid config.
/// The defaults give the standard behavior: only `Set-Cookie` and
/// `Set-Cookie2` are forbidden, obs-fold continuations are joined, and
/// digests are computed one algorithm at a time.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShimConfig {
    pub headers: HeaderConfig,
    pub integrity: IntegrityConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    /// Names dropped in addition to `Set-Cookie` and `Set-Cookie2`
    pub extra_forbidden: Vec<String>,

    /// Join obs-fold continuation lines onto the previous field
    pub fold_continuations: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            extra_forbidden: Vec::new(),
            fold_continuations: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IntegrityConfig {
    /// Compute the digests of distinct algorithms concurrently
    pub concurrent_digests: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Fail to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fail to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ShimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<ShimConfig>(content)?)
    }

    /// Loads the config from a TOML file, falling back to the defaults
    /// when the file is missing or invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Fail to read {}: {err}", path.display());
                log::warn!("Fall back to default config");
                return ShimConfig::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Fail to deserialize config file {}: {err}", path.display());
                log::warn!("Fall back to default config");
                ShimConfig::default()
            }
        }
    }
}
