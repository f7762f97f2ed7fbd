//! Plain data row types written by output backends.

use ems_plan::{Route, RouteLeg};

/// One traversed arc of one route, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLegRow {
    pub flow_id: u16,
    pub severity: &'static str,
    /// Position of this leg along its route, starting at 0.
    pub leg_seq: u32,
    pub from_node: u32,
    pub to_node: u32,
    pub from_lat: f32,
    pub from_lon: f32,
    pub to_lat: f32,
    pub to_lon: f32,
    pub length_m: f32,
    pub capacity_kmh: f32,
    pub effective_kmh: f32,
    pub minutes: f64,
}

impl RouteLegRow {
    pub fn from_leg(route: &Route, seq: usize, leg: &RouteLeg) -> Self {
        Self {
            flow_id: route.commodity.id.0,
            severity: route.commodity.severity.as_str(),
            leg_seq: seq as u32,
            from_node: leg.from.0,
            to_node: leg.to.0,
            from_lat: leg.from_pos.lat,
            from_lon: leg.from_pos.lon,
            to_lat: leg.to_pos.lat,
            to_lon: leg.to_pos.lon,
            length_m: leg.length_m,
            capacity_kmh: leg.capacity_kmh,
            effective_kmh: leg.effective_kmh,
            minutes: leg.minutes,
        }
    }
}

/// One route condensed to a single summary row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummaryRow {
    pub flow_id: u16,
    pub severity: &'static str,
    pub ambulance: &'static str,
    pub origin: u32,
    pub destination: u32,
    pub required_kmh: f32,
    pub legs: u32,
    pub minutes: f64,
    pub cost: f64,
}

impl RouteSummaryRow {
    pub fn from_route(route: &Route) -> Self {
        Self {
            flow_id: route.commodity.id.0,
            severity: route.commodity.severity.as_str(),
            ambulance: route.commodity.ambulance.as_str(),
            origin: route.commodity.origin.0,
            destination: route.commodity.destination.0,
            required_kmh: route.commodity.required_kmh,
            legs: route.legs.len() as u32,
            minutes: route.minutes,
            cost: route.cost,
        }
    }
}
