//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`; configuration problems are always rejected before
//! any sampling, formulation, or solving.

use thiserror::Error;

use crate::severity::Severity;

/// Invalid user-supplied parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("capacity speed range [{min}, {max}] km/h is empty or non-positive")]
    CapacityRange { min: f32, max: f32 },

    #[error("required speed range [{min}, {max}] km/h is empty or non-positive")]
    SpeedRange { min: f32, max: f32 },

    #[error("unit cost for {class} emergencies is {cost}; costs must be non-negative")]
    NegativeCost { class: Severity, cost: f64 },

    #[error("time weight {value} is negative or not finite")]
    TimeWeight { value: f64 },
}

/// Shorthand result type for configuration checks.
pub type CoreResult<T> = Result<T, ConfigError>;
