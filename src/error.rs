// src/error.rs

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Everything that can go wrong before or around a simulation run.
///
/// Once inputs validate, a run always completes; none of these are raised
/// mid-run.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// An input failed validation (non-positive holding cost, service level
    /// outside (0, 1), etc).
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// A sampling distribution could not be built.
    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// True for `InvalidParameter`, whatever the field.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl From<rand_distr::NormalError> for InventoryError {
    fn from(err: rand_distr::NormalError) -> Self {
        Self::Distribution(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = InventoryError::invalid_parameter("holding_cost", "must be > 0, got 0");
        assert!(err.is_invalid_parameter());
        assert_eq!(
            err.to_string(),
            "invalid parameter `holding_cost`: must be > 0, got 0"
        );
    }
}
