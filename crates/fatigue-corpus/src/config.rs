//! Corpus configuration
//!
//! Only the seed and the start of the incident window are tunable. Corpus
//! size, window length and the answer position are fixed.

use crate::error::ConfigError;
use crate::rng::DEFAULT_SEED;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generation settings
///
/// ```
/// use fatigue_corpus::CorpusConfig;
///
/// let config = CorpusConfig::from_toml_str("seed = 7").unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.base_time, CorpusConfig::default().base_time);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Stream seed
    pub seed: u32,
    /// Start of the incident window
    pub base_time: DateTime<Utc>,
}

impl CorpusConfig {
    /// Reference configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// With window start
    #[inline]
    #[must_use]
    pub fn with_base_time(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = base_time;
        self
    }

    /// Parse from TOML text; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded corpus config from {}", path.display());
        Self::from_toml_str(&text)
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            base_time: default_base_time(),
        }
    }
}

/// 2024-12-20T03:00:00Z
#[must_use]
pub fn default_base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 20, 3, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CorpusConfig::new();
        assert_eq!(config.seed, 42);
        assert_eq!(config.base_time.to_rfc3339(), "2024-12-20T03:00:00+00:00");
    }

    #[test]
    fn builder_overrides() {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let config = CorpusConfig::new().with_seed(1).with_base_time(base);
        assert_eq!(config.seed, 1);
        assert_eq!(config.base_time, base);
    }

    #[test]
    fn parses_base_time() {
        let config = CorpusConfig::from_toml_str(
            "seed = 3\nbase_time = \"2025-06-01T12:00:00Z\"\n",
        )
        .unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.base_time, Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn rejects_bad_seed() {
        let err = CorpusConfig::from_toml_str("seed = \"forty-two\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 99").unwrap();
        let config = CorpusConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = CorpusConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
