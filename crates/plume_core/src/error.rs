//! Error types for plume_core

use thiserror::Error;

/// Configuration faults, reported when a descriptor is built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value that must be a finite number was NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// A value that must be zero or greater was negative
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Check that `value` is finite
    pub fn finite(field: &'static str, value: f32) -> Result<f32> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::NonFinite { field, value })
        }
    }

    /// Check that `value` is finite and not negative
    pub fn non_negative(field: &'static str, value: f32) -> Result<f32> {
        let value = Self::finite(field, value)?;
        if value < 0.0 {
            Err(ConfigError::Negative { field, value })
        } else {
            Ok(value)
        }
    }
}

/// Result type for plume_core configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
