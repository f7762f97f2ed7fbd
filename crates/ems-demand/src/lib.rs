//! `ems-demand` — commodity (emergency trip) generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`commodity`] | `Commodity` — one emergency trip                         |
//! | [`policy`]    | `DestinationPolicy` trait, `UniformPolicy`, `FixedPolicy`|
//! | [`generator`] | `CommodityGenerator` — one commodity per severity class  |
//! | [`error`]     | `DemandError`, `DemandResult<T>`                         |
//!
//! A commodity set is built fresh by every "recalculate flows" command and
//! replaces the previous set wholesale; individual commodities are never
//! mutated in place.

pub mod commodity;
pub mod error;
pub mod generator;
pub mod policy;

#[cfg(test)]
mod tests;

pub use commodity::Commodity;
pub use error::{DemandError, DemandResult};
pub use generator::CommodityGenerator;
pub use policy::{DestinationPolicy, FixedPolicy, UniformPolicy};
