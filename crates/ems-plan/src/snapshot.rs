//! The `Scenario` snapshot consumed by one solve.

use std::sync::Arc;

use ems_demand::Commodity;
use ems_network::{CapacityField, RoadNetwork};

/// An immutable capture of everything a solve reads: topology, capacity
/// speeds, and the commodity set.
///
/// Cloning a `Scenario` clones three `Arc`s; the underlying data is shared
/// and never mutated.  The planner's recalculation commands replace whole
/// `Arc`s, so two snapshots taken around a recalculation differ in exactly
/// one component and each stays internally consistent.
#[derive(Clone)]
pub struct Scenario {
    pub network: Arc<RoadNetwork>,
    pub capacities: Arc<CapacityField>,
    pub commodities: Arc<Vec<Commodity>>,
}

impl Scenario {
    pub fn commodity_count(&self) -> usize {
        self.commodities.len()
    }
}
