//! `ems-plan` — the solve pipeline: snapshot → formulation → solver →
//! validated routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`snapshot`] | `Scenario` — immutable (network, capacities, flows)      |
//! | [`route`]    | `Route`, `RouteLeg`, assignment → path extraction        |
//! | [`planner`]  | `Planner`, recalculation commands, `DispatchPlan`        |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                             |
//!
//! # Snapshot discipline
//!
//! A solve operates on a [`Scenario`] captured at its start.  The planner's
//! `recalc_capacities` / `recalc_flows` commands each build a fresh value
//! and swap an `Arc`, so an in-flight solve keeps reading the state it
//! started with; there is no moment at which it could observe half an
//! update.

pub mod error;
pub mod planner;
pub mod route;
pub mod snapshot;


pub use error::{PlanError, PlanResult};
pub use planner::{DispatchPlan, Planner, solve_scenario};
pub use route::{Route, RouteLeg, extract_route};
pub use snapshot::Scenario;

// `DispatchPlan` embeds the solver status; re-export it so downstream
// crates don't need a direct ems-milp dependency just to match on it.
pub use ems_milp::SolveStatus;
