//! Unit tests for ems-demand.

#[cfg(test)]
mod helpers {
    use ems_core::GeoPoint;
    use ems_network::{RoadNetwork, RoadNetworkBuilder};

    /// Line network 0-1-2-3 plus an isolated island node 4.
    pub fn line_with_island() -> (RoadNetwork, [ems_core::NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(0.0, 3.0));
        let island = b.add_node(GeoPoint::new(9.0, 9.0));
        b.add_road(n0, n1, 100.0);
        b.add_road(n1, n2, 100.0);
        b.add_road(n2, n3, 100.0);
        (b.build(), [n0, n1, n2, n3, island])
    }
}

#[cfg(test)]
mod generation {
    use ems_core::{NodeId, PlanRng, Severity, SpeedRange};
    use ems_core::severity::CostTable;
    use crate::{CommodityGenerator, DemandError, FixedPolicy};

    #[test]
    fn one_commodity_per_class() {
        let (net, [base, ..]) = super::helpers::line_with_island();
        let mut rng = PlanRng::seeded(42);
        let set = CommodityGenerator::new(32)
            .generate(
                &net,
                base,
                &Severity::ALL,
                SpeedRange::new(20.0, 50.0),
                &CostTable::default(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set[0].severity, Severity::Mild);
        assert_eq!(set[1].severity, Severity::Moderate);
        assert_eq!(set[2].severity, Severity::Critical);
        for c in &set {
            assert_eq!(c.origin, base);
            assert_ne!(c.destination, base);
        }
    }

    #[test]
    fn destinations_distinct_and_speeds_in_range() {
        let (net, [base, ..]) = super::helpers::line_with_island();
        let range = SpeedRange::new(20.0, 50.0);
        let mut rng = PlanRng::seeded(7);
        let set = CommodityGenerator::new(64)
            .generate(&net, base, &Severity::ALL, range, &CostTable::default(), &mut rng)
            .unwrap();

        let mut dests: Vec<NodeId> = set.iter().map(|c| c.destination).collect();
        dests.sort();
        dests.dedup();
        assert_eq!(dests.len(), 3, "destinations must be distinct");

        for c in &set {
            assert!(range.contains(c.required_kmh), "{} outside range", c.required_kmh);
        }
    }

    #[test]
    fn island_never_selected() {
        let (net, [base, _, _, _, island]) = super::helpers::line_with_island();
        // Many seeds; the island must never appear as a destination.
        for seed in 0..20 {
            let mut rng = PlanRng::seeded(seed);
            let set = CommodityGenerator::new(64)
                .generate(
                    &net,
                    base,
                    &Severity::ALL,
                    SpeedRange::new(20.0, 50.0),
                    &CostTable::default(),
                    &mut rng,
                )
                .unwrap();
            assert!(set.iter().all(|c| c.destination != island));
        }
    }

    #[test]
    fn unreachable_fixed_destination_names_class() {
        let (net, [base, _, _, _, island]) = super::helpers::line_with_island();
        let policy = FixedPolicy::new([(Severity::Critical, island)]);
        let mut rng = PlanRng::seeded(0);
        let result = CommodityGenerator::with_policy(policy, 8).generate(
            &net,
            base,
            &[Severity::Critical],
            SpeedRange::new(20.0, 50.0),
            &CostTable::default(),
            &mut rng,
        );
        match result {
            Err(DemandError::Unreachable { class, attempts }) => {
                assert_eq!(class, Severity::Critical);
                assert_eq!(attempts, 8);
            }
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn invalid_speed_range_rejected_before_sampling() {
        let (net, [base, ..]) = super::helpers::line_with_island();
        let mut rng = PlanRng::seeded(0);
        let result = CommodityGenerator::new(32).generate(
            &net,
            base,
            &Severity::ALL,
            SpeedRange::new(50.0, 20.0),
            &CostTable::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(DemandError::Config(_))));
    }

    #[test]
    fn unknown_base_rejected() {
        let (net, _) = super::helpers::line_with_island();
        let mut rng = PlanRng::seeded(0);
        let result = CommodityGenerator::new(32).generate(
            &net,
            NodeId(999),
            &Severity::ALL,
            SpeedRange::new(20.0, 50.0),
            &CostTable::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(DemandError::UnknownBase(NodeId(999)))));
    }

    #[test]
    fn deterministic_under_seed() {
        let (net, [base, ..]) = super::helpers::line_with_island();
        let make = |seed| {
            let mut rng = PlanRng::seeded(seed);
            CommodityGenerator::new(32)
                .generate(
                    &net,
                    base,
                    &Severity::ALL,
                    SpeedRange::new(20.0, 50.0),
                    &CostTable::default(),
                    &mut rng,
                )
                .unwrap()
        };
        assert_eq!(make(42), make(42));
    }

    #[test]
    fn dispatch_profile_applied() {
        let (net, [base, ..]) = super::helpers::line_with_island();
        let mut rng = PlanRng::seeded(3);
        let costs = CostTable::default();
        let set = CommodityGenerator::new(32)
            .generate(&net, base, &Severity::ALL, SpeedRange::new(20.0, 50.0), &costs, &mut rng)
            .unwrap();
        for c in &set {
            let profile = costs.profile(c.severity);
            assert_eq!(c.ambulance, profile.ambulance);
            assert_eq!(c.unit_cost, profile.unit_cost);
        }
    }
}
