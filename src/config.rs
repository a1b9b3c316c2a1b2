use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors loading or validating an [`AnalysisConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f64),
}

/// User-tunable settings for turning a dataset column into a spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Acquisition rate in Hz; scales bin indices into frequencies.
    pub sample_rate: f64,
    /// Reorder bins so zero frequency sits in the middle.
    pub centered: bool,
    /// Lower clamp for magnitudes in dB (keeps `log10(0)` off the plot).
    pub db_floor: f64,
    /// Which pair column of the dataset to analyse.
    pub column: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1.0,
            centered: true,
            db_floor: -200.0,
            column: 0,
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sample_rate": 48000.0 }}"#).unwrap();

        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.sample_rate, 48000.0);
        assert!(config.centered);
        assert_eq!(config.column, 0);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sample_rate": -1.0 }}"#).unwrap();
        assert!(matches!(
            AnalysisConfig::load(file.path()),
            Err(ConfigError::InvalidSampleRate(_))
        ));

        let config = AnalysisConfig {
            sample_rate: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
