//! Route types and assignment → path extraction.
//!
//! Extraction trusts nothing: even though conservation plus no-splitting
//! guarantee a well-formed path for any feasible assignment, the walk
//! verifies exactly one selected outgoing arc per intermediate node and
//! that no node repeats, failing with an internal consistency error rather
//! than emitting a malformed route.

use ems_core::{EdgeId, GeoPoint, NodeId};
use ems_demand::Commodity;
use ems_milp::{Formulation, effective_kmh, travel_minutes};

use crate::error::{PlanError, PlanResult};
use crate::snapshot::Scenario;

/// A variable value above this counts as "selected".  Backends return 0/1
/// up to floating-point noise.
const SELECTED: f64 = 0.5;

// ── Route types ───────────────────────────────────────────────────────────────

/// One traversed arc with everything the rendering collaborator needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    pub arc: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub from_pos: GeoPoint,
    pub to_pos: GeoPoint,
    pub length_m: f32,
    /// Capacity speed of the underlying segment.
    pub capacity_kmh: f32,
    /// Speed actually sustained: min(required, capacity).
    pub effective_kmh: f32,
    pub minutes: f64,
}

/// A solved route for one commodity.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub commodity: Commodity,
    /// Arcs in traversal order, origin → destination.
    pub legs: Vec<RouteLeg>,
    /// Realized travel time over the whole path, in minutes.
    pub minutes: f64,
    /// Realized cost: time_weight · minutes + the commodity's unit cost.
    pub cost: f64,
}

impl Route {
    /// Nodes visited in order, origin first, destination last.
    pub fn node_path(&self) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.legs.len() + 1);
        path.push(self.commodity.origin);
        path.extend(self.legs.iter().map(|leg| leg.to));
        path
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Walk commodity `k`'s selected arcs from its origin to its destination.
///
/// `assignment` is the backend's variable vector for `formulation`.
pub fn extract_route(
    scenario: &Scenario,
    formulation: &Formulation,
    assignment: &[f64],
    k: usize,
    time_weight: f64,
) -> PlanResult<Route> {
    let network = &*scenario.network;
    let commodity = &scenario.commodities[k];

    let mut visited = vec![false; network.node_count()];
    let mut legs = Vec::new();
    let mut minutes = 0.0;

    let mut node = commodity.origin;
    visited[node.index()] = true;

    while node != commodity.destination {
        let selected: Vec<EdgeId> = network
            .out_arcs(node)
            .filter(|&arc| assignment[formulation.var(k, arc).index()] > SELECTED)
            .collect();

        let arc = match selected.as_slice() {
            &[arc] => arc,
            _ => {
                return Err(PlanError::RouteBranching {
                    class: commodity.severity,
                    node,
                    selected: selected.len(),
                });
            }
        };

        let next = network.arc_to[arc.index()];
        if visited[next.index()] {
            return Err(PlanError::RouteLoop { class: commodity.severity, node: next });
        }
        visited[next.index()] = true;

        let length_m = network.arc_length_m[arc.index()];
        let capacity_kmh = scenario.capacities.arc_kmh(network, arc);
        let effective = effective_kmh(commodity.required_kmh, capacity_kmh);
        let leg_minutes = travel_minutes(length_m, effective);
        minutes += leg_minutes;

        legs.push(RouteLeg {
            arc,
            from: node,
            to: next,
            from_pos: network.node_pos[node.index()],
            to_pos: network.node_pos[next.index()],
            length_m,
            capacity_kmh,
            effective_kmh: effective,
            minutes: leg_minutes,
        });
        node = next;
    }

    Ok(Route {
        commodity: commodity.clone(),
        legs,
        minutes,
        cost: time_weight * minutes + scenario.commodities[k].unit_cost,
    })
}
