//! Tunables for the value layer.
//!
//! The only knob today is the nesting bound applied by the comparator, both
//! marshalers and the literal reader. Hosts usually embed this table in their
//! own TOML config; `from_toml_str` accepts that table on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Default container nesting bound.
pub const DEFAULT_MAX_DEPTH: usize = 256;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid value config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

///
/// ValueConfig
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValueConfig {
    /// Deepest container nesting any walker accepts. A scalar sits at depth
    /// zero; each enclosing array or document adds one.
    pub max_depth: usize,
}

impl ValueConfig {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse and validate a `[value]`-style TOML table.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;

        Ok(config)
    }

    /// Bound the walkers actually apply. A zero `max_depth` that skipped
    /// `validate` is treated as 1.
    #[must_use]
    pub const fn depth_limit(&self) -> usize {
        if self.max_depth == 0 { 1 } else { self.max_depth }
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(())
    }
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_uses_defaults() {
        let config = ValueConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, ValueConfig::default());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn max_depth_is_read() {
        let config = ValueConfig::from_toml_str("max_depth = 8").expect("config should parse");
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = ValueConfig::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDepth));
    }

    #[test]
    fn unvalidated_zero_depth_is_clamped() {
        assert_eq!(ValueConfig::new(0).depth_limit(), 1);
        assert_eq!(ValueConfig::new(5).depth_limit(), 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ValueConfig::from_toml_str("max_dept = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
