//! Tool configuration loaded from `spaceplan.toml`.
//!
//! ```
//! use spaceplan_core::config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     data_dir = "programs"
//!
//!     [defaults]
//!     circulation_factor = 0.30
//!     remote_work_policy = "hybrid_light"
//! "#).unwrap();
//!
//! assert_eq!(config.data_dir.to_str(), Some("programs"));
//! assert_eq!(config.defaults.loss_factor, 0.15);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spaceplan_logic::program::{DEFAULT_CIRCULATION_FACTOR, DEFAULT_LOSS_FACTOR};
use spaceplan_logic::{RemoteWorkPolicy, SpaceProgram};
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "spaceplan.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Directory holding saved program documents.
    pub data_dir: PathBuf,
    /// Factors applied to newly created programs.
    pub defaults: ProgramDefaults,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            defaults: ProgramDefaults::default(),
        }
    }
}

/// Factors and policy for new programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramDefaults {
    pub circulation_factor: f64,
    pub loss_factor: f64,
    pub remote_work_policy: RemoteWorkPolicy,
}

impl Default for ProgramDefaults {
    fn default() -> Self {
        Self {
            circulation_factor: DEFAULT_CIRCULATION_FACTOR,
            loss_factor: DEFAULT_LOSS_FACTOR,
            remote_work_policy: RemoteWorkPolicy::FullOnsite,
        }
    }
}

impl PlannerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or sets
    /// a negative or non-finite default factor.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("defaults.circulation_factor", self.defaults.circulation_factor),
            ("defaults.loss_factor", self.defaults.loss_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// A blank program for `company_name` carrying the configured defaults.
    pub fn new_program(&self, company_name: &str) -> SpaceProgram {
        SpaceProgram {
            circulation_factor: self.defaults.circulation_factor,
            loss_factor: self.defaults.loss_factor,
            remote_work_policy: self.defaults.remote_work_policy,
            ..SpaceProgram::new(company_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_toml_parsing() {
        let config = PlannerConfig::from_toml_str(
            r#"
            data_dir = "/srv/programs"

            [defaults]
            circulation_factor = 0.4
            loss_factor = 0.18
            remote_work_policy = "remote_first"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/programs"));
        assert_eq!(config.defaults.circulation_factor, 0.4);
        assert_eq!(config.defaults.loss_factor, 0.18);
        assert_eq!(config.defaults.remote_work_policy, RemoteWorkPolicy::RemoteFirst);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = PlannerConfig::from_toml_str(
            r#"
            [defaults]
            remote_work_policy = "sometimes"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_negative_factor_rejected() {
        let err = PlannerConfig::from_toml_str(
            r#"
            [defaults]
            loss_factor = -0.1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = PlannerConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert!(PlannerConfig::load("definitely/not/here.toml").is_err());
    }

    #[test]
    fn test_new_program_applies_defaults() {
        let mut config = PlannerConfig::default();
        config.defaults.circulation_factor = 0.25;
        config.defaults.remote_work_policy = RemoteWorkPolicy::HybridLight;
        let program = config.new_program("Hooli");
        assert_eq!(program.company_name, "Hooli");
        assert_eq!(program.circulation_factor, 0.25);
        assert_eq!(program.loss_factor, 0.15);
        assert_eq!(program.remote_work_policy, RemoteWorkPolicy::HybridLight);
        assert!(!program.date_created.is_empty());
    }
}
