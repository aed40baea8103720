//! Error types for the carbon estimation pipeline

use thiserror::Error;

/// Errors surfaced by validation and the embodied-carbon dataset
#[derive(Error, Debug)]
pub enum CarbonError {
    /// Device name not in the supported accelerator set
    #[error("unsupported device '{0}'; choose one of: V100, H100, A100, TPUv3, TPUv4")]
    UnknownDevice(String),

    /// A numeric input outside its valid range
    #[error("invalid value for {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// Embodied-carbon dataset absent, unreadable, or malformed.
    /// Recoverable: the operational-only estimate is still computable.
    #[error("embodied hardware data unavailable: {0}")]
    MissingHardwareData(String),
}

impl CarbonError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
