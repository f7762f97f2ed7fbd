//! The `CommodityGenerator` — builds one commodity per severity class.
//!
//! # Determinism
//!
//! Classes are processed in [`Severity::ALL`] order, and for each class the
//! generator draws the destination first, the required speed second.  Under
//! a seeded RNG the same inputs therefore always produce the same set.

use rustc_hash::FxHashSet;

use ems_core::{ConfigError, FlowId, NodeId, PlanRng, Severity, SpeedRange};
use ems_core::severity::CostTable;
use ems_network::{RoadNetwork, reachable_from};

use crate::commodity::Commodity;
use crate::error::{DemandError, DemandResult};
use crate::policy::{DestinationPolicy, UniformPolicy};

/// Builds commodity sets from a network snapshot and generation parameters.
///
/// The policy decides *where* emergencies occur; the generator enforces the
/// set-level rules: destinations are distinct, never the base, and reachable
/// from it.  Unreachable proposals are re-drawn up to `max_attempts` times
/// before failing with the offending class named.
pub struct CommodityGenerator<P: DestinationPolicy = UniformPolicy> {
    policy: P,
    max_attempts: u32,
}

impl CommodityGenerator<UniformPolicy> {
    /// Generator with the default uniform destination policy.
    pub fn new(max_attempts: u32) -> Self {
        Self { policy: UniformPolicy, max_attempts }
    }
}

impl<P: DestinationPolicy> CommodityGenerator<P> {
    pub fn with_policy(policy: P, max_attempts: u32) -> Self {
        Self { policy, max_attempts }
    }

    /// Produce exactly one commodity per entry of `classes`.
    ///
    /// `required_kmh` is validated before any sampling.  The returned set is
    /// a fresh value; callers swap it in atomically.
    pub fn generate(
        &mut self,
        network: &RoadNetwork,
        base: NodeId,
        classes: &[Severity],
        required_kmh: SpeedRange,
        costs: &CostTable,
        rng: &mut PlanRng,
    ) -> DemandResult<Vec<Commodity>> {
        if !required_kmh.is_valid() {
            return Err(ConfigError::SpeedRange {
                min: required_kmh.min_kmh,
                max: required_kmh.max_kmh,
            }
            .into());
        }
        if !network.contains(base) {
            return Err(DemandError::UnknownBase(base));
        }

        // One BFS serves every reachability check in this set.
        let reachable = reachable_from(network, base);

        let mut taken: FxHashSet<NodeId> = FxHashSet::default();
        let mut commodities = Vec::with_capacity(classes.len());

        for (i, &class) in classes.iter().enumerate() {
            let destination = self.pick_destination(network, base, class, &reachable, &taken, rng)?;
            taken.insert(destination);

            let profile = costs.profile(class);
            commodities.push(Commodity {
                id: FlowId(i as u16),
                severity: class,
                ambulance: profile.ambulance,
                origin: base,
                destination,
                required_kmh: required_kmh.sample(rng),
                unit_cost: profile.unit_cost,
            });
        }
        Ok(commodities)
    }

    fn pick_destination(
        &mut self,
        network: &RoadNetwork,
        base: NodeId,
        class: Severity,
        reachable: &[bool],
        taken: &FxHashSet<NodeId>,
        rng: &mut PlanRng,
    ) -> DemandResult<NodeId> {
        for _ in 0..self.max_attempts {
            let Some(candidate) = self.policy.propose(class, network, base, taken, rng) else {
                return Err(DemandError::NoDestination { class });
            };
            if candidate == base || taken.contains(&candidate) {
                continue;
            }
            if !network.contains(candidate) || !reachable[candidate.index()] {
                continue;
            }
            return Ok(candidate);
        }
        Err(DemandError::Unreachable { class, attempts: self.max_attempts })
    }
}
