//! Pipeline error taxonomy.
//!
//! Configuration and data errors fail before formulation; infeasibility is
//! reported with the commodity implicated, never as a generic failure; a
//! route is only ever returned for a commodity the solver proved feasible.

use thiserror::Error;

use ems_core::{ConfigError, EdgeId, NodeId, Severity};
use ems_demand::DemandError;
use ems_network::NetworkError;

/// Errors produced by the solve pipeline.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Demand(#[from] DemandError),

    /// A commodity has no path of arcs fast enough for its required speed.
    /// `blocking` is the frontier of capacity-incompatible arcs that cut the
    /// destination off from the reachable region.
    #[error(
        "the {class} emergency at node {destination} is unreachable at its required speed \
         ({} arc(s) too slow)",
        .blocking.len()
    )]
    Infeasible {
        class: Severity,
        destination: NodeId,
        blocking: Vec<EdgeId>,
    },

    /// The backend reported an infeasible model even though every commodity
    /// passed the per-commodity feasibility check — a formulation or solver
    /// defect, not a property of the scenario.
    #[error("solver reported an infeasible model after all per-commodity checks passed")]
    SolverInfeasible,

    #[error("solver failure: {0}")]
    Solver(String),

    #[error("solver time budget expired with no incumbent solution")]
    Timeout,

    /// The assignment does not describe exactly one outgoing arc at an
    /// intermediate node.  Guards a solver/formulation defect; cannot occur
    /// for an assignment satisfying conservation + no-splitting.
    #[error(
        "route for the {class} emergency has {selected} selected outgoing arc(s) at node {node}"
    )]
    RouteBranching { class: Severity, node: NodeId, selected: usize },

    /// The assignment revisits a node before reaching the destination.
    #[error("route for the {class} emergency revisits node {node}")]
    RouteLoop { class: Severity, node: NodeId },
}

pub type PlanResult<T> = Result<T, PlanError>;
