//! Destination selection policies.
//!
//! The generator asks a policy for candidate destinations and handles
//! validation (not the base, not already taken, reachable) itself, retrying
//! up to its attempt budget.  Keeping policies proposal-only lets one
//! implementation serve both random and scripted scenarios.

use rustc_hash::FxHashSet;

use ems_core::{NodeId, PlanRng, Severity};
use ems_network::RoadNetwork;

/// Pluggable destination chooser.
///
/// Implementations propose a candidate node; the generator validates it and
/// may call again.  Returning `None` means the policy has nothing (more) to
/// propose for this class.
pub trait DestinationPolicy {
    fn propose(
        &mut self,
        class: Severity,
        network: &RoadNetwork,
        base: NodeId,
        taken: &FxHashSet<NodeId>,
        rng: &mut PlanRng,
    ) -> Option<NodeId>;
}

// ── UniformPolicy ─────────────────────────────────────────────────────────────

/// Default policy: a node drawn uniformly from the whole network.
///
/// The draw deliberately ignores reachability and prior picks — the
/// generator's validate-and-retry loop filters those out, so an unreachable
/// pocket of the map surfaces as a bounded-retry failure rather than a bias
/// in the distribution over valid nodes.
#[derive(Default)]
pub struct UniformPolicy;

impl DestinationPolicy for UniformPolicy {
    fn propose(
        &mut self,
        _class: Severity,
        network: &RoadNetwork,
        _base: NodeId,
        _taken: &FxHashSet<NodeId>,
        rng: &mut PlanRng,
    ) -> Option<NodeId> {
        let n = network.node_count();
        if n == 0 {
            return None;
        }
        Some(NodeId(rng.gen_range(0..n as u32)))
    }
}

// ── FixedPolicy ───────────────────────────────────────────────────────────────

/// Scripted policy: an explicit severity → destination mapping.
///
/// Used by tests and by embeddings where the emergency locations come from
/// real incident data rather than random sampling.
pub struct FixedPolicy {
    targets: Vec<(Severity, NodeId)>,
}

impl FixedPolicy {
    pub fn new(targets: impl IntoIterator<Item = (Severity, NodeId)>) -> Self {
        Self { targets: targets.into_iter().collect() }
    }
}

impl DestinationPolicy for FixedPolicy {
    fn propose(
        &mut self,
        class: Severity,
        _network: &RoadNetwork,
        _base: NodeId,
        _taken: &FxHashSet<NodeId>,
        _rng: &mut PlanRng,
    ) -> Option<NodeId> {
        self.targets
            .iter()
            .find(|(s, _)| *s == class)
            .map(|&(_, node)| node)
    }
}
