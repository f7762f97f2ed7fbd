//! `ems-core` — foundational types for the `ems_route` emergency routing
//! toolkit.
//!
//! This crate is a dependency of every other `ems-*` crate.  It intentionally
//! has no `ems-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`, `SegmentId`, `FlowId`               |
//! | [`geo`]      | `GeoPoint`, haversine distance                          |
//! | [`rng`]      | `PlanRng` (seedable, reproducible)                      |
//! | [`severity`] | `Severity`, `AmbulanceClass`, `CostTable`               |
//! | [`params`]   | `SpeedRange`, `PlanParams`                              |
//! | [`error`]    | `ConfigError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod severity;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, FlowId, NodeId, SegmentId};
pub use params::{PlanParams, SpeedRange};
pub use rng::PlanRng;
pub use severity::{AmbulanceClass, CostTable, DispatchProfile, Severity};
