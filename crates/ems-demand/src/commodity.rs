//! The `Commodity` type — one emergency trip through the network.

use ems_core::{AmbulanceClass, FlowId, NodeId, Severity};

/// One emergency trip: a single vehicle travelling from the base station to
/// a destination node at (at least) its required speed.
///
/// Commodities are plain immutable values.  A new set replaces the old one
/// atomically whenever flows are recalculated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commodity {
    pub id: FlowId,

    /// Triage class; determines the response unit and its cost.
    pub severity: Severity,

    /// Response-unit type, from the severity dispatch table.
    pub ambulance: AmbulanceClass,

    /// Base station node, shared by all commodities in a set.
    pub origin: NodeId,

    /// Emergency location.
    pub destination: NodeId,

    /// Minimum sustained speed this trip must achieve, in km/h.  Arcs whose
    /// capacity speed is below this are not legally traversable.
    pub required_kmh: f32,

    /// Operational cost of dispatching this unit, charged once per trip.
    pub unit_cost: f64,
}
