//! Unit tests for ems-network.
//!
//! All tests use hand-crafted networks; no external data files.

#[cfg(test)]
mod helpers {
    use ems_core::GeoPoint;
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Build a small grid network for testing.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Undirected roads: 0-1, 1-2, 2-4, 0-3, 3-4 (five segments, ten arcs).
    pub fn grid_network() -> (RoadNetwork, [ems_core::NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(1.0, 0.0));
        let n4 = b.add_node(GeoPoint::new(1.0, 2.0));

        b.add_road(n0, n1, 100.0);
        b.add_road(n1, n2, 100.0);
        b.add_road(n2, n4, 100.0);
        b.add_road(n0, n3, 500.0);
        b.add_road(n3, n4, 100.0);

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ems_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.arc_count(), 0);
        assert_eq!(net.segment_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn undirected_road_shares_segment() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(6.23, -75.58));
        let c = b.add_node(GeoPoint::new(6.24, -75.57));
        let seg = b.add_road(a, c, 1_000.0);
        let net = b.build();

        assert_eq!(net.node_count(), 2);
        assert_eq!(net.arc_count(), 2);
        assert_eq!(net.segment_count(), 1);
        // Both arcs carry the shared segment.
        assert_eq!(net.arc_segment[0], seg);
        assert_eq!(net.arc_segment[1], seg);
    }

    #[test]
    fn one_way_road() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_one_way(a, c, 100.0);
        let net = b.build();

        assert_eq!(net.arc_count(), 1);
        assert_eq!(net.segment_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0); // no return arc
    }

    #[test]
    fn csr_out_arcs() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();

        assert_eq!(net.out_degree(n0), 2); // n0→n1, n0→n3
        assert_eq!(net.out_degree(n1), 2);
        assert_eq!(net.out_degree(n2), 2);
        assert_eq!(net.out_degree(n3), 2);
        assert_eq!(net.out_degree(n4), 2);

        // Every outgoing arc from n0 has n0 as its source.
        for arc in net.out_arcs(n0) {
            assert_eq!(net.arc_from[arc.index()], n0);
        }
        // n1 is a direct neighbor of n0.
        assert!(net.out_arcs(n0).any(|a| net.arc_to[a.index()] == n1));
    }

    #[test]
    fn endpoints_match_arrays() {
        let (net, _) = super::helpers::grid_network();
        for arc in (0..net.arc_count()).map(|i| ems_core::EdgeId(i as u32)) {
            let (from, to) = net.endpoints(arc);
            assert_eq!(from, net.arc_from[arc.index()]);
            assert_eq!(to, net.arc_to[arc.index()]);
        }
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use ems_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn snap_exact_position() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let snapped = net.snap_to_node(GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, n0);
    }

    #[test]
    fn snap_nearest() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.4)).unwrap(), n0);
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.6)).unwrap(), n1);
    }

    #[test]
    fn empty_network_returns_none() {
        let net = RoadNetworkBuilder::new().build();
        assert!(net.snap_to_node(GeoPoint::new(0.0, 0.0)).is_none());
    }
}

// ── Capacity field ────────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use ems_core::{PlanRng, SegmentId, SpeedRange};
    use crate::{CapacityField, NetworkError};

    #[test]
    fn generated_capacities_stay_in_range() {
        let (net, _) = super::helpers::grid_network();
        let range = SpeedRange::new(30.0, 70.0);
        let mut rng = PlanRng::seeded(42);
        let caps = CapacityField::generate(&net, range, &mut rng).unwrap();

        assert_eq!(caps.len(), net.segment_count());
        for &c in caps.as_slice() {
            assert!(range.contains(c), "capacity {c} outside [30, 70]");
        }
    }

    #[test]
    fn inverted_range_rejected_before_sampling() {
        let (net, _) = super::helpers::grid_network();
        let mut rng = PlanRng::seeded(42);
        let result = CapacityField::generate(&net, SpeedRange::new(70.0, 30.0), &mut rng);
        assert!(matches!(result, Err(NetworkError::Config(_))));
    }

    #[test]
    fn deterministic_under_seed() {
        let (net, _) = super::helpers::grid_network();
        let range = SpeedRange::new(30.0, 70.0);
        let a = CapacityField::generate(&net, range, &mut PlanRng::seeded(7)).unwrap();
        let b = CapacityField::generate(&net, range, &mut PlanRng::seeded(7)).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn both_directions_share_capacity() {
        let (net, _) = super::helpers::grid_network();
        let mut rng = PlanRng::seeded(1);
        let caps = CapacityField::generate(&net, SpeedRange::new(30.0, 70.0), &mut rng).unwrap();

        for arc in (0..net.arc_count()).map(|i| ems_core::EdgeId(i as u32)) {
            let seg = net.arc_segment[arc.index()];
            assert_eq!(caps.arc_kmh(&net, arc), caps.segment_kmh(seg));
        }
    }

    #[test]
    fn from_values_checks_length() {
        let (net, _) = super::helpers::grid_network();
        assert!(matches!(
            CapacityField::from_values(&net, vec![50.0; 2]),
            Err(NetworkError::CapacityLength { expected: 5, got: 2 })
        ));
        let caps = CapacityField::from_values(&net, vec![50.0; 5]).unwrap();
        assert_eq!(caps.segment_kmh(SegmentId(3)), 50.0);
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reach {
    use ems_core::GeoPoint;
    use crate::{RoadNetworkBuilder, reachable_from, reachable_where};

    #[test]
    fn all_reachable_in_connected_grid() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let seen = reachable_from(&net, n0);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn disconnected_component_unreachable() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        let island = b.add_node(GeoPoint::new(5.0, 5.0));
        b.add_road(a, c, 100.0);
        let net = b.build();

        let seen = reachable_from(&net, a);
        assert!(seen[a.index()]);
        assert!(seen[c.index()]);
        assert!(!seen[island.index()]);
    }

    #[test]
    fn one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_one_way(a, c, 100.0);
        let net = b.build();

        assert!(reachable_from(&net, a)[c.index()]);
        assert!(!reachable_from(&net, c)[a.index()]);
    }

    #[test]
    fn filtered_arcs_restrict_reach() {
        let (net, [n0, n1, _, n3, _]) = super::helpers::grid_network();
        // Forbid every arc leaving n0 except n0→n1.
        let seen = reachable_where(&net, n0, |arc| {
            net.arc_from[arc.index()] != n0 || net.arc_to[arc.index()] == n1
        });
        // n3 is still reachable the long way around (n1→n2→n4→n3).
        assert!(seen[n3.index()]);

        // Forbid all arcs: only the origin remains.
        let seen = reachable_where(&net, n0, |_| false);
        assert_eq!(seen.iter().filter(|&&s| s).count(), 1);
    }
}
