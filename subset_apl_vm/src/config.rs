//! Session configuration.
//!
//! The only setting the assignment engine consults is the index origin, the
//! first valid index of every axis. It is fixed for the lifetime of a
//! `Context`.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Environment variable holding the index origin.
pub const ORIGIN_ENV_VAR: &str = "SAPL_ORIGIN";

const DEFAULT_ORIGIN: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_origin")]
    origin: i64,
}

fn default_origin() -> i64 {
    DEFAULT_ORIGIN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
        }
    }
}

impl Config {
    /// Create a configuration with the given index origin (0 or 1).
    pub fn with_origin(origin: i64) -> EvalResult<Self> {
        validate_origin(origin)?;
        Ok(Self { origin })
    }

    /// Index origin used to translate user-facing indices to offsets.
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// Read the configuration from `SAPL_ORIGIN`, falling back to defaults
    /// when the variable is unset.
    pub fn from_env() -> EvalResult<Self> {
        match env::var(ORIGIN_ENV_VAR) {
            Ok(raw) => Self::from_origin_str(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse an origin given as text, as found in the environment.
    pub fn from_origin_str(raw: &str) -> EvalResult<Self> {
        let origin = raw.trim().parse::<i64>().map_err(|e| {
            EvalError::invalid_config(format!("{}={:?}: {}", ORIGIN_ENV_VAR, raw, e))
        })?;
        Self::with_origin(origin)
    }

    /// Parse a TOML document such as `origin = 0`.
    pub fn from_toml_str(source: &str) -> EvalResult<Self> {
        let parsed: Config =
            toml::from_str(source).map_err(|e| EvalError::invalid_config(e.to_string()))?;
        validate_origin(parsed.origin)?;
        Ok(parsed)
    }
}

fn validate_origin(origin: i64) -> EvalResult<()> {
    if origin == 0 || origin == 1 {
        Ok(())
    } else {
        Err(EvalError::invalid_config(format!(
            "origin must be 0 or 1, got {}",
            origin
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin_is_one() {
        assert_eq!(Config::default().origin(), 1);
    }

    #[test]
    fn test_toml_origin() {
        let config = Config::from_toml_str("origin = 0").unwrap();
        assert_eq!(config.origin(), 0);

        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.origin(), 1);
    }

    #[test]
    fn test_toml_rejects_bad_origin() {
        let err = Config::from_toml_str("origin = 2").unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidConfig("origin must be 0 or 1, got 2".to_string())
        );
        assert!(Config::from_toml_str("origin = \"zero\"").is_err());
        assert!(Config::from_toml_str("base = 0").is_err());
    }

    #[test]
    fn test_origin_str() {
        assert_eq!(Config::from_origin_str(" 0 ").unwrap().origin(), 0);
        assert!(Config::from_origin_str("one").is_err());
        assert!(Config::from_origin_str("-1").is_err());
    }
}
