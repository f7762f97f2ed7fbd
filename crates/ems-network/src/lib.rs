//! `ems-network` — road network graph and per-segment capacity speeds.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`network`]    | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`      |
//! | [`capacity`]   | `CapacityField` — per-segment capacity speed vector     |
//! | [`reach`]      | BFS reachability over the full or a filtered arc set    |
//! | [`error`]      | `NetworkError`, `NetworkResult<T>`                      |
//!
//! # Snapshots
//!
//! `RoadNetwork` is immutable after `build()`.  Capacity speeds live in a
//! separate [`CapacityField`] so "recalculate capacities" replaces one value
//! wholesale instead of mutating the graph — a solve holds its own
//! `(network, capacities)` pair and can never observe a partial update.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod capacity;
pub mod error;
pub mod network;
pub mod reach;

#[cfg(test)]
mod tests;

pub use capacity::CapacityField;
pub use error::{NetworkError, NetworkResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use reach::{reachable_from, reachable_where};
