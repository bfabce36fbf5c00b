//! Configuration for the file-naming convention.
//!
//! `NamingConfig` centralizes the serial-length constant so it is not
//! hardcoded at every parse site.

use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serial length used when no explicit configuration is supplied.
pub const DEFAULT_SERIAL_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Number of characters in a serial token.
    pub serial_len: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            serial_len: DEFAULT_SERIAL_LEN,
        }
    }
}

impl NamingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial_len == 0 {
            return Err(ConfigError::ZeroSerialLen);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("[SHASM_CONFIG_001] serial_len must be non-zero")]
    ZeroSerialLen,
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroSerialLen => error_codes::CONFIG_ZERO_SERIAL_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serial_len_is_twelve() {
        assert_eq!(NamingConfig::default().serial_len, 12);
    }

    #[test]
    fn zero_serial_len_rejected() {
        let config = NamingConfig { serial_len: 0 };
        let err = config.validate().expect_err("zero length should fail");
        assert_eq!(err.code(), error_codes::CONFIG_ZERO_SERIAL_LEN);
    }
}
