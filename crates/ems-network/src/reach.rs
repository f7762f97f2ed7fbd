//! Breadth-first reachability over the full or a filtered arc set.
//!
//! Two consumers:
//! - commodity generation verifies a candidate destination shares the base
//!   node's connected component (`reachable_from`);
//! - the feasibility pre-check restricts traversal to arcs whose capacity
//!   supports a commodity's required speed (`reachable_where`).

use std::collections::VecDeque;

use ems_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;

/// Nodes reachable from `origin` following directed arcs.
///
/// Returns one flag per node; `origin` itself is always reachable.
pub fn reachable_from(network: &RoadNetwork, origin: NodeId) -> Vec<bool> {
    reachable_where(network, origin, |_| true)
}

/// Nodes reachable from `origin` using only arcs accepted by `usable`.
///
/// The predicate is called at most once per arc.
pub fn reachable_where<F>(network: &RoadNetwork, origin: NodeId, mut usable: F) -> Vec<bool>
where
    F: FnMut(EdgeId) -> bool,
{
    let mut seen = vec![false; network.node_count()];
    if !network.contains(origin) {
        return seen;
    }
    seen[origin.index()] = true;

    let mut queue = VecDeque::new();
    queue.push_back(origin);

    while let Some(node) = queue.pop_front() {
        for arc in network.out_arcs(node) {
            if !usable(arc) {
                continue;
            }
            let next = network.arc_to[arc.index()];
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}
