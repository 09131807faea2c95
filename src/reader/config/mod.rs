use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::reader::error::ConfigError;

/// Decoding policy for an [`AudioReader`](crate::AudioReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Treat corrupt packets and truncated streams as errors.
    /// When false they are logged and the decodable part is kept.
    pub strict: bool,
    /// Ask codecs to verify embedded checksums where the format has them.
    pub verify: bool,
    /// Trim encoder delay and padding where the format describes it.
    pub enable_gapless: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            strict: true,
            verify: false,
            enable_gapless: false,
        }
    }
}

impl ReaderConfig {
    /// Lenient preset: skip bad packets instead of failing the read.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading reader config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
