//! `ems-milp` — MILP formulation and solver backends.
//!
//! # Crate layout
//!
//! | Module              | Contents                                              |
//! |---------------------|-------------------------------------------------------|
//! | [`problem`]         | `MilpProblem` — solver-agnostic variables/constraints |
//! | [`formulation`]     | `Formulation` — routing model over one snapshot       |
//! | [`backend`]         | `MilpBackend` trait, `SolveOutcome`, `SolveStatus`    |
//! | [`microlp_backend`] | Bundled pure-Rust backend via the `microlp` crate     |
//!
//! # Pluggability
//!
//! The pipeline talks to solvers only through [`MilpBackend`]: a plain-data
//! [`MilpProblem`] goes in, a status plus variable assignment comes out.
//! Any LP/MILP engine that can answer that contract is interchangeable with
//! the bundled [`MicrolpBackend`].

pub mod backend;
pub mod formulation;
pub mod microlp_backend;
pub mod problem;

#[cfg(test)]
mod tests;

pub use backend::{MilpBackend, SolveOptions, SolveOutcome, SolveStatus};
pub use formulation::{Formulation, effective_kmh, travel_minutes};
pub use microlp_backend::MicrolpBackend;
pub use problem::{ConstraintOp, LinearConstraint, MilpProblem, VarId, VarSpec};
