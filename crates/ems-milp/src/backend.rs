//! The `MilpBackend` trait implemented by all solver backends.
//!
//! The pipeline never sees a solver type directly — only this narrow
//! contract.  Backends are required to be honest about status: a result is
//! reported `Optimal` only when optimality was proven; a time-limited run
//! that stops early reports `Timeout`, carrying the best incumbent if one
//! exists.

use std::time::Duration;

use crate::problem::MilpProblem;

// ── Options ───────────────────────────────────────────────────────────────────

/// Per-solve options passed through to the backend.
#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    /// Wall-clock budget.  `None` lets the backend run to completion.
    /// Backends without interruption support may ignore it; they must not
    /// misreport status because of it.
    pub time_limit: Option<Duration>,
}

// ── Status & outcome ──────────────────────────────────────────────────────────

/// Terminal status of one solve.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveStatus {
    /// Proven optimal assignment.
    Optimal,
    /// The model admits no feasible assignment.
    Infeasible,
    /// The time budget expired; `assignment` holds the incumbent if any.
    Timeout,
    /// Backend failure or unexpected state.
    Error,
}

/// What a backend hands back: status, objective, assignment.
///
/// `objective` includes the problem's constant offset.  `assignment` holds
/// one value per variable, in [`MilpProblem::vars`] order.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub objective: Option<f64>,
    pub assignment: Option<Vec<f64>>,
    /// Backend-specific detail for `Error` (and optionally `Timeout`).
    pub message: Option<String>,
}

impl SolveOutcome {
    pub fn optimal(objective: f64, assignment: Vec<f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective: Some(objective),
            assignment: Some(assignment),
            message: None,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            status: SolveStatus::Infeasible,
            objective: None,
            assignment: None,
            message: None,
        }
    }

    pub fn timeout(incumbent: Option<(f64, Vec<f64>)>) -> Self {
        let (objective, assignment) = match incumbent {
            Some((obj, asg)) => (Some(obj), Some(asg)),
            None => (None, None),
        };
        Self { status: SolveStatus::Timeout, objective, assignment, message: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Error,
            objective: None,
            assignment: None,
            message: Some(message.into()),
        }
    }
}

// ── Backend trait ─────────────────────────────────────────────────────────────

/// Pluggable MILP engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; a backend value is shared by every
/// solve the planner runs.
pub trait MilpBackend: Send + Sync {
    /// Short backend identifier for error messages and logs.
    fn name(&self) -> &'static str;

    /// Solve `problem` to proven optimality within `options`.
    ///
    /// Must not panic on infeasible or degenerate models — every failure
    /// mode maps to a [`SolveStatus`].
    fn solve(&self, problem: &MilpProblem, options: &SolveOptions) -> SolveOutcome;
}
