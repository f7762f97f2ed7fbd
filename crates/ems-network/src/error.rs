//! Network-subsystem error type.

use thiserror::Error;

use ems_core::{ConfigError, NodeId};

/// Errors produced by `ems-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("road network has no nodes")]
    EmptyNetwork,

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("capacity vector has {got} entries but the network has {expected} segments")]
    CapacityLength { expected: usize, got: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
