//! Configuration loading and typed config structures for the simulator.
//!
//! The optional configuration lives in `foodchain-config.yaml` in the
//! working directory. Every field has a default, so an empty or missing
//! file yields the classroom defaults.

use std::path::Path;

use foodchain_types::{Coefficients, PopulationModel, TrophicLevel};
use serde::Deserialize;

use crate::scale::DEFAULT_MAX_DOTS;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The file parsed but a value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `foodchain-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Initial selections for a new or reset session.
    #[serde(default)]
    pub session: SessionConfig,

    /// Coefficient pair per propagation model.
    #[serde(default)]
    pub models: CoefficientTable,

    /// Diagram settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// How the "load example" command picks a chain.
    #[serde(default)]
    pub examples: ExamplesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for model in PopulationModel::ALL {
            let pair = self.models.coefficients_for(model);
            if pair.downward.is_sign_negative() || pair.upward.is_sign_negative() {
                return Err(ConfigError::Invalid {
                    field: format!("models.{}", model.key()),
                    reason: "coefficients must not be negative".to_owned(),
                });
            }
        }
        if self.display.dots_per_row == 0 {
            return Err(ConfigError::Invalid {
                field: "display.dots_per_row".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Initial selections for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Model selected at startup and after reset.
    #[serde(default)]
    pub default_model: PopulationModel,

    /// Level targeted by dynamic updates at startup and after reset.
    #[serde(default = "default_change_level")]
    pub default_change_level: TrophicLevel,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_model: PopulationModel::default(),
            default_change_level: default_change_level(),
        }
    }
}

/// Coefficient pair for each propagation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CoefficientTable {
    /// Coefficients for [`PopulationModel::Balanced`].
    #[serde(default = "balanced")]
    pub balanced: Coefficients,

    /// Coefficients for [`PopulationModel::PredatorPressure`].
    #[serde(default = "predator_pressure")]
    pub predator_pressure: Coefficients,

    /// Coefficients for [`PopulationModel::BottomUp`].
    #[serde(default = "bottom_up")]
    pub bottom_up: Coefficients,
}

impl CoefficientTable {
    /// Coefficients configured for a model.
    pub const fn coefficients_for(&self, model: PopulationModel) -> Coefficients {
        match model {
            PopulationModel::Balanced => self.balanced,
            PopulationModel::PredatorPressure => self.predator_pressure,
            PopulationModel::BottomUp => self.bottom_up,
        }
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            balanced: balanced(),
            predator_pressure: predator_pressure(),
            bottom_up: bottom_up(),
        }
    }
}

/// Diagram settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Maximum dots drawn for a single level.
    #[serde(default = "default_max_dots")]
    pub max_dots: u64,

    /// Dots per row in a level's dot grid.
    #[serde(default = "default_dots_per_row")]
    pub dots_per_row: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_dots: default_max_dots(),
            dots_per_row: default_dots_per_row(),
        }
    }
}

/// How examples are picked when none is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleSelection {
    /// Walk the library in order, wrapping around.
    #[default]
    Cycle,
    /// Pick uniformly at random.
    Random,
}

/// Example selection settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ExamplesConfig {
    /// Selection mode for `example` with no argument.
    #[serde(default)]
    pub selection: ExampleSelection,

    /// Seed for random selection; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_change_level() -> TrophicLevel {
    TrophicLevel::PrimaryConsumer
}

const fn balanced() -> Coefficients {
    PopulationModel::Balanced.coefficients()
}

const fn predator_pressure() -> Coefficients {
    PopulationModel::PredatorPressure.coefficients()
}

const fn bottom_up() -> Coefficients {
    PopulationModel::BottomUp.coefficients()
}

const fn default_max_dots() -> u64 {
    DEFAULT_MAX_DOTS
}

const fn default_dots_per_row() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.session.default_model, PopulationModel::Balanced);
        assert_eq!(
            config.session.default_change_level,
            TrophicLevel::PrimaryConsumer
        );
        assert_eq!(config.models.bottom_up.upward, dec!(0.8));
        assert_eq!(config.display.max_dots, 80);
        assert_eq!(config.examples.selection, ExampleSelection::Cycle);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
session:
  default_model: predator_pressure
  default_change_level: tertiary_consumer

models:
  balanced:
    downward: 0.4
    upward: 0.6
  predator_pressure:
    downward: 0.9
    upward: 0.2
  bottom_up:
    downward: "0.25"
    upward: "0.75"

display:
  max_dots: 40
  dots_per_row: 8

examples:
  selection: random
  seed: 99

logging:
  level: "debug"
"#;

        let config = AppConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(
            config.session.default_model,
            PopulationModel::PredatorPressure
        );
        assert_eq!(
            config.session.default_change_level,
            TrophicLevel::TertiaryConsumer
        );
        assert_eq!(config.models.balanced.downward, dec!(0.4));
        assert_eq!(config.models.predator_pressure.upward, dec!(0.2));
        assert_eq!(config.models.bottom_up.downward, dec!(0.25));
        assert_eq!(config.display.max_dots, 40);
        assert_eq!(config.display.dots_per_row, 8);
        assert_eq!(config.examples.selection, ExampleSelection::Random);
        assert_eq!(config.examples.seed, Some(99));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "session:\n  default_model: bottom_up\n";
        let config = AppConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.session.default_model, PopulationModel::BottomUp);
        // Everything else uses defaults
        assert_eq!(config.models, CoefficientTable::default());
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = AppConfig::parse("");
        assert_eq!(config.ok(), Some(AppConfig::default()));
    }

    #[test]
    fn negative_coefficient_rejected() {
        let yaml = "models:\n  balanced:\n    downward: -0.5\n    upward: 0.5\n";
        let config = AppConfig::parse(yaml);
        assert!(matches!(
            config,
            Err(ConfigError::Invalid { ref field, .. }) if field == "models.balanced"
        ));
    }

    #[test]
    fn zero_dots_per_row_rejected() {
        let config = AppConfig::parse("display:\n  dots_per_row: 0\n");
        assert!(matches!(config, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn unknown_model_is_a_yaml_error() {
        let config = AppConfig::parse("session:\n  default_model: chaotic\n");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("foodchain-config.yaml");
        if path.exists() {
            let config = AppConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
