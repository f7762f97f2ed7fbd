//! Demand-subsystem error type.

use thiserror::Error;

use ems_core::{ConfigError, NodeId, Severity};

/// Errors produced by commodity generation.
#[derive(Debug, Error)]
pub enum DemandError {
    #[error("base node {0} not found in network")]
    UnknownBase(NodeId),

    #[error(
        "no reachable destination found for the {class} emergency after {attempts} attempts"
    )]
    Unreachable { class: Severity, attempts: u32 },

    #[error("destination policy proposed nothing for the {class} emergency")]
    NoDestination { class: Severity },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type DemandResult<T> = Result<T, DemandError>;
