//! JSON configuration for hosts embedding the HR core.
//!
//! # Invariants
//! - Missing optional keys fall back to defaults; unknown keys are rejected.
//! - A loaded configuration has passed [`HrmConfig::validate`].

use crate::dates::DEFAULT_RETIREMENT_OFFSET_YEARS;
use crate::logging::{default_log_level, parse_level};
use crate::report::employee_sheet::{CompanyProfile, SheetOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const MAX_RETIREMENT_OFFSET_YEARS: u32 = 100;

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HrmConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Absolute log directory; file logging stays off when absent.
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default = "default_offset")]
    pub retirement_offset_years: u32,
    #[serde(default)]
    pub company: CompanyProfile,
}

fn default_offset() -> u32 {
    DEFAULT_RETIREMENT_OFFSET_YEARS
}

impl HrmConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            log_level: None,
            log_dir: None,
            retirement_offset_years: DEFAULT_RETIREMENT_OFFSET_YEARS,
            company: CompanyProfile::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("db_path cannot be empty".to_string()));
        }
        if let Some(level) = self.log_level.as_deref() {
            parse_level(level).map_err(ConfigError::Invalid)?;
        }
        if let Some(dir) = self.log_dir.as_deref() {
            if !Path::new(dir.trim()).is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{dir}`"
                )));
            }
        }
        if self.retirement_offset_years == 0
            || self.retirement_offset_years > MAX_RETIREMENT_OFFSET_YEARS
        {
            return Err(ConfigError::Invalid(format!(
                "retirement_offset_years must be within 1..={MAX_RETIREMENT_OFFSET_YEARS}, got {}",
                self.retirement_offset_years
            )));
        }
        Ok(())
    }

    /// Configured level, or the build-mode default.
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level())
    }

    /// Sheet options with the configured retirement offset and English labels.
    pub fn sheet_options(&self) -> SheetOptions {
        SheetOptions {
            retirement_offset_years: self.retirement_offset_years,
            ..SheetOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, HrmConfig};
    use crate::logging::default_log_level;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = HrmConfig::from_json_str(r#"{"db_path": "/var/lib/hrm/hrm.db"}"#).unwrap();
        assert_eq!(config.retirement_offset_years, 60);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.company.name, "");
        assert_eq!(config.sheet_options().retirement_offset_years, 60);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = HrmConfig::from_json_str(r#"{"db_path": "a.db", "colour": "red"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_values_are_invalid() {
        let err = HrmConfig::from_json_str(r#"{"db_path": "a.db", "log_level": "loud"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = HrmConfig::from_json_str(r#"{"db_path": "a.db", "log_dir": "logs"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("absolute"));

        let err =
            HrmConfig::from_json_str(r#"{"db_path": "a.db", "retirement_offset_years": 0}"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_level_follows_build_mode() {
        let config = HrmConfig::new("a.db");
        assert_eq!(config.log_level(), default_log_level());
    }

    #[test]
    fn explicit_level_wins_over_default() {
        let mut config = HrmConfig::new("a.db");
        config.log_level = Some("warn".to_string());
        assert_eq!(config.log_level(), "warn");
    }
}
