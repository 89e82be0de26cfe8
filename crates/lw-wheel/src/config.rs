//! Wheel configuration
//!
//! Every section defaults to the stock wheel: 1..=33, red/cream segments,
//! force-aware spins and the `wheel-numbers` storage slot. A YAML file only
//! needs the keys it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::{PoolConfig, PoolGenerator, check_range};
use crate::palette::Palette;
use crate::rotation::SpinProfile;

/// Name of the persisted slot holding the remaining values
pub const DEFAULT_SLOT: &str = "wheel-numbers";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where the remaining pool is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Slot name (file stem for file-backed stores)
    pub slot: String,
    /// Storage directory; `None` uses the platform data directory
    pub dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            dir: None,
        }
    }
}

/// Complete wheel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Default range
    pub pool: PoolConfig,
    /// Segment colors
    pub palette: Palette,
    /// Spin tuning
    pub spin: SpinProfile,
    /// Persisted slot
    pub storage: StorageConfig,
}

impl WheelConfig {
    /// Config using the fixed 5-turn, 4 s spin
    pub fn classic() -> Self {
        Self {
            spin: SpinProfile::classic(),
            ..Default::default()
        }
    }

    /// Load and validate a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Check ranges that would otherwise break the planner's guarantees
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PoolConfig {
            default_start,
            default_end,
        } = self.pool;
        check_range(default_start, default_end).map_err(|e| {
            ConfigError::Invalid(format!("pool.default_start..=pool.default_end: {e}"))
        })?;

        let spin = &self.spin;
        let bounds = [
            ("min_spins", spin.min_spins),
            ("max_spins", spin.max_spins),
            ("min_duration_secs", spin.min_duration_secs),
            ("max_duration_secs", spin.max_duration_secs),
            ("min_force", spin.min_force),
        ];
        for (name, value) in bounds {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "spin.{name} must be finite, got {value}"
                )));
            }
        }

        // Fewer than one extra turn could land behind the current rotation
        if spin.min_spins < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "spin.min_spins must be >= 1, got {}",
                spin.min_spins
            )));
        }
        if spin.max_spins < spin.min_spins {
            return Err(ConfigError::Invalid(format!(
                "spin.max_spins ({}) < spin.min_spins ({})",
                spin.max_spins, spin.min_spins
            )));
        }
        let durations_ok =
            spin.min_duration_secs >= 0.0 && spin.max_duration_secs >= spin.min_duration_secs;
        if !durations_ok {
            return Err(ConfigError::Invalid(format!(
                "spin durations must satisfy 0 <= min ({}) <= max ({})",
                spin.min_duration_secs, spin.max_duration_secs
            )));
        }
        if !(0.0 < spin.min_force && spin.min_force <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "spin.min_force must be in (0, 1], got {}",
                spin.min_force
            )));
        }

        if self.storage.slot.is_empty() {
            return Err(ConfigError::Invalid("storage.slot is empty".into()));
        }

        Ok(())
    }

    /// Generator for this config's palette and default range
    pub fn generator(&self) -> PoolGenerator {
        PoolGenerator::new(self.palette.clone(), self.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CREAM, RED};
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.pool.default_start, 1);
        assert_eq!(config.pool.default_end, 33);
        assert_eq!(config.palette.primary.as_str(), RED);
        assert_eq!(config.palette.secondary.as_str(), CREAM);
        assert_relative_eq!(config.spin.max_spins, 15.0);
        assert_eq!(config.storage.slot, "wheel-numbers");
        assert!(config.validate().is_ok());
        assert!(WheelConfig::classic().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r##"
pool:
  default_end: 12
spin:
  max_duration_secs: 6.0
palette:
  primary: "#0000ff"
"##;
        let config = WheelConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.pool.default_start, 1);
        assert_eq!(config.pool.default_end, 12);
        assert_relative_eq!(config.spin.max_duration_secs, 6.0);
        assert_relative_eq!(config.spin.min_duration_secs, 2.5);
        assert_eq!(config.palette.primary.as_str(), "#0000ff");
        assert_eq!(config.palette.secondary.as_str(), CREAM);
        assert_eq!(config.generator().generate(&[]).len(), 12);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let inverted = "pool:\n  default_start: 10\n  default_end: 2\n";
        assert!(matches!(
            WheelConfig::from_yaml(inverted),
            Err(ConfigError::Invalid(_))
        ));

        let no_turns = "spin:\n  min_spins: 0.5\n";
        assert!(matches!(
            WheelConfig::from_yaml(no_turns),
            Err(ConfigError::Invalid(_))
        ));

        let zero_floor = "spin:\n  min_force: 0.0\n";
        assert!(matches!(
            WheelConfig::from_yaml(zero_floor),
            Err(ConfigError::Invalid(_))
        ));

        let huge_range = "pool:\n  default_end: 9223372036854775807\n";
        assert!(matches!(
            WheelConfig::from_yaml(huge_range),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_non_finite_spin_bounds_rejected() {
        for yaml in [
            "spin:\n  min_spins: .inf\n  max_spins: .inf\n",
            "spin:\n  max_spins: .inf\n",
            "spin:\n  max_duration_secs: .inf\n",
            "spin:\n  min_duration_secs: .nan\n",
        ] {
            assert!(
                matches!(WheelConfig::from_yaml(yaml), Err(ConfigError::Invalid(_))),
                "{yaml:?}"
            );
        }

        let config = WheelConfig {
            spin: SpinProfile {
                max_duration_secs: f64::INFINITY,
                ..SpinProfile::charged()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(matches!(
            WheelConfig::from_yaml("this is not: valid: yaml: {{{}}}"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_round_trip_and_load() {
        let config = WheelConfig::classic();
        let yaml = config.to_yaml().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.yaml");
        std::fs::write(&path, yaml).unwrap();

        assert_eq!(WheelConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            WheelConfig::load("/definitely/not/here.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
