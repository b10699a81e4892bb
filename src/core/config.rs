//! Game configuration types.
//!
//! Games are tuned at startup by providing:
//! - `StartConfig`: Initial coefficients, bounds, abstraction and RGB sample
//! - `EffectConfig`: Budget and cost model for card effects
//! - `SessionConfig`: Victory threshold, miss penalty, resample policy
//! - `GameConfig`: Combines all configuration
//!
//! Every section has defaults matching the shipped game, so a TOML file only
//! needs to name the values it overrides:
//!
//! ```
//! use rgba_puzzle::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("[effects]\nabstraction_chance = 0.25\n").unwrap();
//! assert_eq!(config.effects.abstraction_chance, 0.25);
//! assert_eq!(config.session.victory_threshold, 10_000.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::channel::ChannelMap;
use super::state::{Bound, Bounds, Coefficients, Rgb};

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial tuning of a new game.
    pub start: StartConfig,

    /// Card effect generation.
    pub effects: EffectConfig,

    /// Submission handling.
    pub session: SessionConfig,
}

impl GameConfig {
    /// Load and validate a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.start.validate()?;
        self.effects.validate()?;
        self.session.validate()
    }
}

/// Initial state of a new game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub coefficients: Coefficients,
    pub bounds: Bounds,
    pub abstraction: u32,
    /// RGB shown before the first deal replaces it.
    pub rgb: Rgb,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            coefficients: ChannelMap::splat(0.33),
            bounds: ChannelMap::splat(Bound::new(3.5, 20.5)),
            abstraction: 0,
            rgb: ChannelMap::new(12.0, 15.0, 8.0),
        }
    }
}

impl StartConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (channel, coefficient) in self.coefficients.iter() {
            if !(0.0..=1.0).contains(coefficient) {
                return Err(ConfigError::Invalid(format!(
                    "start coefficient {channel} must be in [0, 1], got {coefficient}"
                )));
            }
        }
        for (channel, bound) in self.bounds.iter() {
            if !bound.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "start bound {channel} must satisfy 0 <= min <= max <= 255, got [{}, {}]",
                    bound.min, bound.max
                )));
            }
        }
        Ok(())
    }
}

/// Inclusive magnitude range for a generated delta.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max
    }
}

/// Budget and cost model for card effects.
///
/// A card draws a budget uniformly from `[-budget_range, budget_range]` and
/// keeps adding effects while the remaining budget is outside
/// `[-budget_threshold, budget_threshold]`. Each effect debits
/// `delta * weight` (coefficients are measured in percent points first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub budget_range: f64,
    pub budget_threshold: f64,

    /// Hard cap on effects per card, abstraction included.
    pub max_effects: usize,

    /// Probability that a card carries `+1 Abstraction`.
    pub abstraction_chance: f64,

    /// Budget debit of the abstraction effect. Negative: harder problems are
    /// paid for with stronger buffs.
    pub abstraction_cost: f64,

    /// When set, an abstraction card carries no other effect and skips the
    /// budget entirely.
    pub abstraction_exclusive: bool,

    /// Coefficient delta magnitude (fraction, 0.01 = 1%).
    pub coefficient_magnitude: Span,
    /// Bound delta magnitude (channel units).
    pub bound_magnitude: Span,

    pub coefficient_weight: f64,
    pub bound_weight: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            budget_range: 2.0,
            budget_threshold: 1.0,
            max_effects: 2,
            abstraction_chance: 0.20,
            abstraction_cost: -5.0,
            abstraction_exclusive: false,
            coefficient_magnitude: Span::new(0.01, 0.05),
            bound_magnitude: Span::new(0.5, 2.0),
            coefficient_weight: 1.0,
            bound_weight: 2.0,
        }
    }
}

impl EffectConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.abstraction_chance) {
            return Err(ConfigError::Invalid(format!(
                "abstraction_chance must be a probability, got {}",
                self.abstraction_chance
            )));
        }
        if !(1..=2).contains(&self.max_effects) {
            return Err(ConfigError::Invalid(format!(
                "max_effects must be 1 or 2, got {}",
                self.max_effects
            )));
        }
        if self.budget_range < 0.0 || self.budget_threshold < 0.0 {
            return Err(ConfigError::Invalid("budget values must be non-negative".into()));
        }
        if !self.coefficient_magnitude.is_valid() || !self.bound_magnitude.is_valid() {
            return Err(ConfigError::Invalid(
                "magnitude spans must satisfy 0 < min <= max".into(),
            ));
        }
        if self.coefficient_weight <= 0.0 || self.bound_weight <= 0.0 {
            return Err(ConfigError::Invalid("effect weights must be positive".into()));
        }
        Ok(())
    }
}

/// When the RGB sample is redrawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResamplePolicy {
    /// Redraw after every accepted submission, hit or miss.
    #[default]
    EverySubmission,
    /// Redraw only after a solved card; a miss keeps the sample.
    CorrectOnly,
}

/// Submission handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Score that counts as victory. Play continues past it.
    pub victory_threshold: f64,
    /// Fraction of the current value lost on a miss.
    pub penalty_ratio: f64,
    pub resample: ResamplePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            victory_threshold: 10_000.0,
            penalty_ratio: 0.5,
            resample: ResamplePolicy::EverySubmission,
        }
    }
}

impl SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.victory_threshold <= 0.0 {
            return Err(ConfigError::Invalid("victory_threshold must be positive".into()));
        }
        if self.penalty_ratio < 0.0 {
            return Err(ConfigError::Invalid("penalty_ratio must be non-negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
            ConfigError::Invalid(err) => write!(f, "Invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Channel;

    #[test]
    fn test_defaults_match_shipped_game() {
        let config = GameConfig::default();

        assert_eq!(config.start.coefficients, ChannelMap::splat(0.33));
        assert_eq!(config.start.bounds[Channel::G], Bound::new(3.5, 20.5));
        assert_eq!(config.start.abstraction, 0);
        assert_eq!(config.effects.max_effects, 2);
        assert_eq!(config.effects.abstraction_cost, -5.0);
        assert_eq!(config.session.resample, ResamplePolicy::EverySubmission);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parses_overrides() {
        let toml = r#"
[start]
abstraction = 4

[start.bounds]
r = { min = 1.0, max = 5.0 }
g = { min = 3.5, max = 20.5 }
b = { min = 0.0, max = 255.0 }

[effects]
abstraction_chance = 0.25
abstraction_exclusive = true

[session]
resample = "correct_only"
victory_threshold = 500.0
"#;
        let config = GameConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.start.abstraction, 4);
        assert_eq!(config.start.bounds[Channel::R], Bound::new(1.0, 5.0));
        assert_eq!(config.start.bounds[Channel::B], Bound::new(0.0, 255.0));
        // Sections not named keep their defaults
        assert_eq!(config.start.coefficients, ChannelMap::splat(0.33));
        assert!(config.effects.abstraction_exclusive);
        assert_eq!(config.session.resample, ResamplePolicy::CorrectOnly);
        assert_eq!(config.session.victory_threshold, 500.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = GameConfig::from_toml_str("[effects]\nabstraction_chance = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_inverted_bound() {
        let toml = r#"
[start.bounds]
r = { min = 3.5, max = 20.5 }
g = { min = 30.0, max = 10.0 }
b = { min = 3.5, max = 20.5 }
"#;
        let err = GameConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("bound G"));
    }

    #[test]
    fn test_rejects_too_many_effects() {
        let err = GameConfig::from_toml_str("[effects]\nmax_effects = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("[session\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load_from_file("/nonexistent/rgba.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
