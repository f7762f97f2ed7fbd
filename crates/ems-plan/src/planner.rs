//! The `Planner` — state owner and pipeline driver.
//!
//! # Command model
//!
//! The planner owns three pieces of state behind `Arc`s: the road network
//! (fixed for the planner's lifetime), the capacity field, and the commodity
//! set.  Two commands regenerate state:
//!
//! - [`recalc_capacities`](Planner::recalc_capacities) — fresh uniform
//!   capacity draw per segment, swapped in wholesale;
//! - [`recalc_flows`](Planner::recalc_flows) — fresh commodity set, swapped
//!   in wholesale.
//!
//! [`solve`](Planner::solve) captures a [`Scenario`] snapshot first and runs
//! the whole pipeline against it, so commands issued while a solve is in
//! flight (in an embedding that allows that) never corrupt its inputs.

use std::sync::Arc;

use ems_core::{EdgeId, NodeId, PlanParams, PlanRng, Severity};
use ems_demand::{Commodity, CommodityGenerator, DestinationPolicy, UniformPolicy};
use ems_milp::{
    Formulation, MicrolpBackend, MilpBackend, SolveOptions, SolveStatus,
};
use ems_network::{CapacityField, NetworkError, RoadNetwork, reachable_where};

use crate::error::{PlanError, PlanResult};
use crate::route::{Route, extract_route};
use crate::snapshot::Scenario;

// ── DispatchPlan ──────────────────────────────────────────────────────────────

/// The pipeline's output: one validated route per commodity.
#[derive(Clone, Debug)]
pub struct DispatchPlan {
    pub routes: Vec<Route>,
    /// Solver objective (time-weighted minutes plus unit costs).
    pub objective: f64,
    /// `Optimal`, or `Timeout` when the backend returned an incumbent it
    /// could not prove optimal.  Never any other status.
    pub status: SolveStatus,
}

impl DispatchPlan {
    /// Total realized travel time across all routes, in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.routes.iter().map(|r| r.minutes).sum()
    }

    /// Total realized cost across all routes.
    pub fn total_cost(&self) -> f64 {
        self.routes.iter().map(|r| r.cost).sum()
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Owns the scenario state and runs solves against snapshots of it.
///
/// Generic over the solver backend and the destination policy so tests and
/// embeddings can substitute either; `Planner::new` wires the defaults
/// (bundled `microlp` backend, uniform destinations).
pub struct Planner<B: MilpBackend = MicrolpBackend, P: DestinationPolicy = UniformPolicy> {
    params: PlanParams,
    base: NodeId,
    network: Arc<RoadNetwork>,
    capacities: Arc<CapacityField>,
    commodities: Arc<Vec<Commodity>>,
    backend: B,
    generator: CommodityGenerator<P>,
    rng: PlanRng,
}

impl Planner<MicrolpBackend, UniformPolicy> {
    /// Planner with the default backend and destination policy.
    pub fn new(network: RoadNetwork, base: NodeId, params: PlanParams) -> PlanResult<Self> {
        let attempts = params.resample_attempts;
        Self::with_parts(
            network,
            base,
            params,
            MicrolpBackend,
            CommodityGenerator::new(attempts),
        )
    }
}

impl<B: MilpBackend, P: DestinationPolicy> Planner<B, P> {
    /// Planner with an explicit backend and generator.
    ///
    /// Validates configuration and data up front, then generates the initial
    /// capacity field and commodity set.
    pub fn with_parts(
        network: RoadNetwork,
        base: NodeId,
        params: PlanParams,
        backend: B,
        mut generator: CommodityGenerator<P>,
    ) -> PlanResult<Self> {
        params.validate()?;
        if network.is_empty() {
            return Err(NetworkError::EmptyNetwork.into());
        }
        if !network.contains(base) {
            return Err(NetworkError::NodeNotFound(base).into());
        }

        let mut rng = PlanRng::from_seed(params.seed);
        let capacities = CapacityField::generate(&network, params.capacity_kmh, &mut rng)?;
        let commodities = generator.generate(
            &network,
            base,
            &Severity::ALL,
            params.required_kmh,
            &params.costs,
            &mut rng,
        )?;

        Ok(Self {
            params,
            base,
            network: Arc::new(network),
            capacities: Arc::new(capacities),
            commodities: Arc::new(commodities),
            backend,
            generator,
            rng,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn base(&self) -> NodeId {
        self.base
    }

    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Capture the current state for one solve.
    pub fn snapshot(&self) -> Scenario {
        Scenario {
            network: Arc::clone(&self.network),
            capacities: Arc::clone(&self.capacities),
            commodities: Arc::clone(&self.commodities),
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Redraw every segment's capacity speed and swap the field in.
    pub fn recalc_capacities(&mut self) -> PlanResult<()> {
        let fresh =
            CapacityField::generate(&self.network, self.params.capacity_kmh, &mut self.rng)?;
        self.capacities = Arc::new(fresh);
        Ok(())
    }

    /// Regenerate the commodity set and swap it in.
    pub fn recalc_flows(&mut self) -> PlanResult<()> {
        let fresh = self.generator.generate(
            &self.network,
            self.base,
            &Severity::ALL,
            self.params.required_kmh,
            &self.params.costs,
            &mut self.rng,
        )?;
        self.commodities = Arc::new(fresh);
        Ok(())
    }

    // ── Solve ─────────────────────────────────────────────────────────────

    /// Snapshot the current state and run formulation → solver → extraction.
    pub fn solve(&self) -> PlanResult<DispatchPlan> {
        solve_scenario(&self.snapshot(), &self.params, &self.backend)
    }
}

// ── Pipeline over one snapshot ────────────────────────────────────────────────

/// Run the whole pipeline against one captured scenario.
///
/// Exposed separately from [`Planner`] so embeddings can solve historical or
/// hand-built snapshots.
pub fn solve_scenario<B: MilpBackend>(
    scenario: &Scenario,
    params: &PlanParams,
    backend: &B,
) -> PlanResult<DispatchPlan> {
    params.validate()?;
    check_feasibility(scenario)?;

    let formulation = Formulation::build(
        &scenario.network,
        &scenario.capacities,
        &scenario.commodities,
        params.time_weight,
    );
    let options = SolveOptions { time_limit: params.time_limit };
    let outcome = backend.solve(&formulation.problem, &options);

    let status = match outcome.status {
        SolveStatus::Optimal => SolveStatus::Optimal,
        // An incumbent is usable but must keep its non-optimal flag.
        SolveStatus::Timeout if outcome.assignment.is_some() => SolveStatus::Timeout,
        SolveStatus::Timeout => return Err(PlanError::Timeout),
        // The pre-check proved each commodity feasible independently, and
        // commodities do not interact in this model.
        SolveStatus::Infeasible => return Err(PlanError::SolverInfeasible),
        SolveStatus::Error => {
            let backend_name = backend.name();
            let detail = outcome.message.unwrap_or_else(|| "no detail".into());
            return Err(PlanError::Solver(format!("{backend_name}: {detail}")));
        }
    };

    let assignment = outcome
        .assignment
        .as_deref()
        .ok_or_else(|| PlanError::Solver(format!("{}: missing assignment", backend.name())))?;

    let routes = (0..scenario.commodity_count())
        .map(|k| extract_route(scenario, &formulation, assignment, k, params.time_weight))
        .collect::<PlanResult<Vec<Route>>>()?;

    let objective = outcome
        .objective
        .unwrap_or_else(|| formulation.problem.objective_value(assignment));

    Ok(DispatchPlan { routes, objective, status })
}

/// Verify each commodity can reach its destination over arcs fast enough
/// for it, before building any model.
///
/// On failure, the blocking set is the frontier of too-slow arcs leaving
/// the region reachable at the commodity's required speed — a cut that
/// separates the destination from the base.
fn check_feasibility(scenario: &Scenario) -> PlanResult<()> {
    let network = &*scenario.network;
    for commodity in scenario.commodities.iter() {
        let usable = |arc| scenario.capacities.arc_kmh(network, arc) >= commodity.required_kmh;
        let reachable = reachable_where(network, commodity.origin, usable);

        if !reachable[commodity.destination.index()] {
            // Frontier arcs leave the reachable region; each is necessarily
            // too slow, otherwise BFS would have crossed it.
            let blocking = (0..network.arc_count())
                .map(|i| EdgeId(i as u32))
                .filter(|&arc| {
                    let (from, to) = network.endpoints(arc);
                    reachable[from.index()] && !reachable[to.index()]
                })
                .collect();
            return Err(PlanError::Infeasible {
                class: commodity.severity,
                destination: commodity.destination,
                blocking,
            });
        }
    }
    Ok(())
}
