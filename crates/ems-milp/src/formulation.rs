//! Routing formulation: one binary variable per (commodity, arc).
//!
//! # Model
//!
//! For commodity `k` and directed arc `e`, `x[k,e] = 1` iff `k`'s route
//! traverses `e`.  Variables are laid out densely, commodity-major
//! (`var = k · arc_count + e`), so extraction can map back without a table.
//!
//! Objective:
//!
//! ```text
//! minimize  time_weight · Σ_k Σ_e x[k,e] · travel_minutes(k, e)
//!           + Σ_k unit_cost(k)                  (constant offset)
//! ```
//!
//! Constraints, per commodity:
//! - **Flow conservation** at every node: outgoing − incoming selected arcs
//!   = +1 at the origin, −1 at the destination, 0 elsewhere.
//! - **Capacity compatibility**: arcs with `C_e < R_k` get bounds (0, 0) —
//!   an illegal road is infeasible for that commodity, never merely
//!   expensive.
//! - **No splitting**: at most one selected outgoing arc per node, so the
//!   solution is one simple path, not a fractional flow (a single vehicle
//!   cannot divide).
//!
//! Capacity bounds *which* commodities may use an arc, not how many use it
//! at once; commodities do not consume each other's capacity.

use ems_core::EdgeId;
use ems_demand::Commodity;
use ems_network::{CapacityField, RoadNetwork};

use crate::problem::{ConstraintOp, MilpProblem, VarId, VarSpec};

// ── Travel-time helpers ───────────────────────────────────────────────────────

/// Speed actually sustained on an arc: the commodity's required speed capped
/// by the arc's capacity speed.
#[inline]
pub fn effective_kmh(required_kmh: f32, capacity_kmh: f32) -> f32 {
    required_kmh.min(capacity_kmh)
}

/// Minutes to traverse `length_m` metres at `speed_kmh`.
#[inline]
pub fn travel_minutes(length_m: f32, speed_kmh: f32) -> f64 {
    (length_m as f64 / 1_000.0) / speed_kmh as f64 * 60.0
}

// ── Formulation ───────────────────────────────────────────────────────────────

/// The MILP for one `(network, capacities, commodities)` snapshot, plus the
/// variable layout needed to interpret an assignment afterwards.
pub struct Formulation {
    pub problem: MilpProblem,
    commodity_count: usize,
    arc_count: usize,
}

impl Formulation {
    /// Build the full model for one snapshot.
    ///
    /// The inputs are read-only; the caller guarantees they belong to the
    /// same snapshot (the planner captures all three together).
    pub fn build(
        network: &RoadNetwork,
        capacities: &CapacityField,
        commodities: &[Commodity],
        time_weight: f64,
    ) -> Formulation {
        let arc_count = network.arc_count();
        let node_count = network.node_count();
        let mut problem = MilpProblem::new();

        // ── Variables, commodity-major ────────────────────────────────────
        for commodity in commodities {
            problem.objective_offset += commodity.unit_cost;
            for arc in 0..arc_count {
                let arc = EdgeId(arc as u32);
                let capacity = capacities.arc_kmh(network, arc);
                let speed = effective_kmh(commodity.required_kmh, capacity);
                let cost =
                    time_weight * travel_minutes(network.arc_length_m[arc.index()], speed);
                let spec = if capacity < commodity.required_kmh {
                    VarSpec::fixed_zero(cost)
                } else {
                    VarSpec::binary(cost)
                };
                problem.add_var(spec);
            }
        }

        // Incoming arcs per node (CSR only stores outgoing).
        let mut in_arcs: Vec<Vec<EdgeId>> = vec![Vec::new(); node_count];
        for arc in 0..arc_count {
            in_arcs[network.arc_to[arc].index()].push(EdgeId(arc as u32));
        }

        // ── Constraints, per commodity ────────────────────────────────────
        for (k, commodity) in commodities.iter().enumerate() {
            let var = |arc: EdgeId| VarId((k * arc_count + arc.index()) as u32);

            for node in network.nodes() {
                let out: Vec<EdgeId> = network.out_arcs(node).collect();
                let incoming = &in_arcs[node.index()];

                // Flow conservation: out − in = ±1 at the endpoints, 0 else.
                let rhs = if node == commodity.origin {
                    1.0
                } else if node == commodity.destination {
                    -1.0
                } else {
                    0.0
                };
                if !out.is_empty() || !incoming.is_empty() || rhs != 0.0 {
                    let mut terms = Vec::with_capacity(out.len() + incoming.len());
                    terms.extend(out.iter().map(|&a| (var(a), 1.0)));
                    terms.extend(incoming.iter().map(|&a| (var(a), -1.0)));
                    problem.add_constraint(terms, ConstraintOp::Eq, rhs);
                }

                // No splitting: at most one selected outgoing arc.  With one
                // or zero outgoing arcs the bound holds trivially.
                if out.len() >= 2 {
                    let terms = out.iter().map(|&a| (var(a), 1.0)).collect();
                    problem.add_constraint(terms, ConstraintOp::Le, 1.0);
                }
            }
        }

        Formulation { problem, commodity_count: commodities.len(), arc_count }
    }

    /// The variable for commodity index `k` on `arc`.
    #[inline]
    pub fn var(&self, k: usize, arc: EdgeId) -> VarId {
        debug_assert!(k < self.commodity_count && arc.index() < self.arc_count);
        VarId((k * self.arc_count + arc.index()) as u32)
    }

    pub fn commodity_count(&self) -> usize {
        self.commodity_count
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }
}
