//! Unit tests for ems-milp.

#[cfg(test)]
mod helpers {
    use ems_core::{FlowId, GeoPoint, NodeId, Severity};
    use ems_core::severity::CostTable;
    use ems_demand::Commodity;
    use ems_network::{CapacityField, RoadNetwork, RoadNetworkBuilder};

    /// Triangle network: 0-1, 1-2, 0-2 (three segments, six arcs).
    pub fn triangle() -> (RoadNetwork, [NodeId; 3]) {
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(1.0, 1.0));
        b.add_road(n0, n1, 1_000.0);
        b.add_road(n1, n2, 1_000.0);
        b.add_road(n0, n2, 1_500.0);
        (b.build(), [n0, n1, n2])
    }

    pub fn commodity(origin: NodeId, destination: NodeId, required_kmh: f32) -> Commodity {
        let profile = CostTable::default().profile(Severity::Critical);
        Commodity {
            id: FlowId(0),
            severity: Severity::Critical,
            ambulance: profile.ambulance,
            origin,
            destination,
            required_kmh,
            unit_cost: profile.unit_cost,
        }
    }

    pub fn uniform_caps(net: &RoadNetwork, kmh: f32) -> CapacityField {
        CapacityField::from_values(net, vec![kmh; net.segment_count()]).unwrap()
    }
}

// ── Problem data model ────────────────────────────────────────────────────────

#[cfg(test)]
mod problem {
    use crate::{ConstraintOp, MilpProblem, VarSpec};

    #[test]
    fn objective_value_includes_offset() {
        let mut p = MilpProblem::new();
        let a = p.add_var(VarSpec::binary(2.0));
        let b = p.add_var(VarSpec::binary(3.0));
        p.objective_offset = 10.0;
        p.add_constraint(vec![(a, 1.0), (b, 1.0)], ConstraintOp::Le, 1.0);

        assert_eq!(p.var_count(), 2);
        assert_eq!(p.constraint_count(), 1);
        assert_eq!(p.objective_value(&[1.0, 0.0]), 12.0);
        assert_eq!(p.objective_value(&[0.0, 1.0]), 13.0);
    }

    #[test]
    fn fixed_zero_spec() {
        let spec = VarSpec::fixed_zero(5.0);
        assert!(spec.is_fixed());
        assert!(spec.integer);
        assert_eq!(spec.upper, 0.0);
        assert!(!VarSpec::binary(1.0).is_fixed());
    }
}

// ── Travel-time helpers ───────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use crate::{effective_kmh, travel_minutes};

    #[test]
    fn effective_speed_is_min() {
        assert_eq!(effective_kmh(40.0, 55.0), 40.0);
        assert_eq!(effective_kmh(40.0, 30.0), 30.0);
    }

    #[test]
    fn minutes_at_60_kmh() {
        // 1 km at 60 km/h = 1 minute.
        let m = travel_minutes(1_000.0, 60.0);
        assert!((m - 1.0).abs() < 1e-9, "got {m}");
        // 2.5 km at 30 km/h = 5 minutes.
        let m = travel_minutes(2_500.0, 30.0);
        assert!((m - 5.0).abs() < 1e-9, "got {m}");
    }
}

// ── Formulation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod formulation {
    use ems_core::EdgeId;
    use crate::{ConstraintOp, Formulation, travel_minutes};

    #[test]
    fn dense_variable_layout() {
        let (net, [n0, _, n2]) = super::helpers::triangle();
        let caps = super::helpers::uniform_caps(&net, 50.0);
        let commodities =
            vec![super::helpers::commodity(n0, n2, 40.0), super::helpers::commodity(n0, n2, 30.0)];
        let f = Formulation::build(&net, &caps, &commodities, 1.0);

        assert_eq!(f.commodity_count(), 2);
        assert_eq!(f.arc_count(), 6);
        assert_eq!(f.problem.var_count(), 12);
        // Commodity-major layout: k=1 vars start at arc_count.
        assert_eq!(f.var(1, EdgeId(0)).index(), 6);
    }

    #[test]
    fn incompatible_arcs_are_fixed_zero() {
        let (net, [n0, _, n2]) = super::helpers::triangle();
        // Segments at 30 km/h; a commodity needing 40 km/h can use nothing.
        let caps = super::helpers::uniform_caps(&net, 30.0);
        let commodities = vec![super::helpers::commodity(n0, n2, 40.0)];
        let f = Formulation::build(&net, &caps, &commodities, 1.0);

        for spec in &f.problem.vars {
            assert!(spec.is_fixed(), "all arcs should be pinned to zero");
        }
    }

    #[test]
    fn objective_offset_charges_unit_costs_once() {
        let (net, [n0, _, n2]) = super::helpers::triangle();
        let caps = super::helpers::uniform_caps(&net, 50.0);
        let commodities =
            vec![super::helpers::commodity(n0, n2, 40.0), super::helpers::commodity(n0, n2, 40.0)];
        let f = Formulation::build(&net, &caps, &commodities, 1.0);
        assert_eq!(f.problem.objective_offset, 1_000.0); // 2 × 500
    }

    #[test]
    fn arc_cost_uses_effective_speed_and_weight() {
        let (net, [n0, _, n2]) = super::helpers::triangle();
        let caps = super::helpers::uniform_caps(&net, 35.0);
        let commodities = vec![super::helpers::commodity(n0, n2, 30.0)];
        let weight = 2.5;
        let f = Formulation::build(&net, &caps, &commodities, weight);

        for arc in 0..f.arc_count() {
            let arc = EdgeId(arc as u32);
            // capacity 35 ≥ required 30 → effective speed is 30 km/h.
            let expected = weight * travel_minutes(net.arc_length_m[arc.index()], 30.0);
            let got = f.problem.vars[f.var(0, arc).index()].obj_coef;
            assert!((got - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn conservation_and_no_split_constraints() {
        let (net, [n0, _, n2]) = super::helpers::triangle();
        let caps = super::helpers::uniform_caps(&net, 50.0);
        let commodities = vec![super::helpers::commodity(n0, n2, 40.0)];
        let f = Formulation::build(&net, &caps, &commodities, 1.0);

        let eq: Vec<_> = f
            .problem
            .constraints
            .iter()
            .filter(|c| c.op == ConstraintOp::Eq)
            .collect();
        let le: Vec<_> = f
            .problem
            .constraints
            .iter()
            .filter(|c| c.op == ConstraintOp::Le)
            .collect();

        // One conservation row per node, one no-split row per node with
        // out-degree ≥ 2 (all three in a triangle).
        assert_eq!(eq.len(), 3);
        assert_eq!(le.len(), 3);

        // Conservation right-hand sides: +1 once (origin), −1 once
        // (destination), 0 elsewhere.
        let mut rhs: Vec<f64> = eq.iter().map(|c| c.rhs).collect();
        rhs.sort_by(f64::total_cmp);
        assert_eq!(rhs, vec![-1.0, 0.0, 1.0]);

        for c in le {
            assert_eq!(c.rhs, 1.0);
            assert!(c.terms.iter().all(|&(_, coef)| coef == 1.0));
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod backend {
    use ems_core::EdgeId;
    use crate::{
        ConstraintOp, Formulation, MicrolpBackend, MilpBackend, MilpProblem, SolveOptions,
        SolveStatus, VarSpec,
    };

    #[test]
    fn picks_cheaper_binary() {
        // min 2a + 3b  s.t.  a + b ≥ 1  → a = 1, b = 0.
        let mut p = MilpProblem::new();
        let a = p.add_var(VarSpec::binary(2.0));
        let b = p.add_var(VarSpec::binary(3.0));
        p.add_constraint(vec![(a, 1.0), (b, 1.0)], ConstraintOp::Ge, 1.0);

        let outcome = MicrolpBackend.solve(&p, &SolveOptions::default());
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!((outcome.objective.unwrap() - 2.0).abs() < 1e-6);
        let asg = outcome.assignment.unwrap();
        assert!(asg[a.index()] > 0.5);
        assert!(asg[b.index()] < 0.5);
    }

    #[test]
    fn reports_infeasible() {
        // x pinned to zero but required to be ≥ 1.
        let mut p = MilpProblem::new();
        let x = p.add_var(VarSpec::fixed_zero(1.0));
        p.add_constraint(vec![(x, 1.0)], ConstraintOp::Ge, 1.0);

        let outcome = MicrolpBackend.solve(&p, &SolveOptions::default());
        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert!(outcome.assignment.is_none());
    }

    #[test]
    fn objective_includes_offset() {
        let mut p = MilpProblem::new();
        let x = p.add_var(VarSpec::binary(4.0));
        p.add_constraint(vec![(x, 1.0)], ConstraintOp::Ge, 1.0);
        p.objective_offset = 100.0;

        let outcome = MicrolpBackend.solve(&p, &SolveOptions::default());
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!((outcome.objective.unwrap() - 104.0).abs() < 1e-6);
    }

    #[test]
    fn routes_around_slow_road() {
        // Triangle, direct road 0-2 too slow for the commodity: the model
        // must route 0→1→2 even though the direct arc is shorter.
        let (net, [n0, _, n2]) = super::helpers::triangle();
        let mut kmh = vec![50.0; net.segment_count()];
        // Find the 0-2 segment and throttle it below the required speed.
        for arc in 0..net.arc_count() {
            let arc = EdgeId(arc as u32);
            let (from, to) = net.endpoints(arc);
            if (from, to) == (n0, n2) {
                kmh[net.arc_segment[arc.index()].index()] = 30.0;
            }
        }
        let caps = ems_network::CapacityField::from_values(&net, kmh).unwrap();
        let commodities = vec![super::helpers::commodity(n0, n2, 40.0)];
        let f = Formulation::build(&net, &caps, &commodities, 1.0);

        let outcome = MicrolpBackend.solve(&f.problem, &SolveOptions::default());
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let asg = outcome.assignment.unwrap();

        let selected: Vec<EdgeId> = (0..net.arc_count())
            .map(|i| EdgeId(i as u32))
            .filter(|&a| asg[f.var(0, a).index()] > 0.5)
            .collect();
        assert_eq!(selected.len(), 2, "two-arc detour expected");
        for &a in &selected {
            assert!(caps.arc_kmh(&net, a) >= 40.0);
        }
    }
}
