//! Solve parameters shared by every stage of the pipeline.
//!
//! All parameter validation happens here, before any sampling or model
//! construction: an invalid range or cost never reaches a solver.

use std::time::Duration;

use crate::error::ConfigError;
use crate::rng::PlanRng;
use crate::severity::{CostTable, Severity};

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// An inclusive speed interval in km/h, used for both capacity speeds
/// (`[Cmin, Cmax]`) and required speeds (`[Rmin, Rmax]`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedRange {
    pub min_kmh: f32,
    pub max_kmh: f32,
}

impl SpeedRange {
    #[inline]
    pub fn new(min_kmh: f32, max_kmh: f32) -> Self {
        Self { min_kmh, max_kmh }
    }

    /// A range is usable when both bounds are positive, finite, and ordered.
    pub fn is_valid(&self) -> bool {
        self.min_kmh > 0.0
            && self.min_kmh.is_finite()
            && self.max_kmh.is_finite()
            && self.min_kmh <= self.max_kmh
    }

    #[inline]
    pub fn contains(&self, kmh: f32) -> bool {
        self.min_kmh <= kmh && kmh <= self.max_kmh
    }

    /// Draw a uniform speed from the range.  Callers must have validated the
    /// range first; drawing from an invalid range is a logic error upstream.
    #[inline]
    pub fn sample(&self, rng: &mut PlanRng) -> f32 {
        rng.gen_range(self.min_kmh..=self.max_kmh)
    }
}

// ── PlanParams ────────────────────────────────────────────────────────────────

/// Top-level solve configuration.
///
/// Typically built from UI form values by the embedding application and
/// passed to `Planner::new`.  The same `PlanParams` value plus the same seed
/// always reproduces the same scenario and the same routes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanParams {
    /// Capacity speed range `[Cmin, Cmax]` sampled per road segment.
    pub capacity_kmh: SpeedRange,

    /// Required speed range `[Rmin, Rmax]` sampled per commodity.
    pub required_kmh: SpeedRange,

    /// Severity → unit operational cost table.
    pub costs: CostTable,

    /// Scalar balancing travel time against operational cost in the
    /// objective.  Must be non-negative.
    pub time_weight: f64,

    /// Master RNG seed.  `Some` makes every regeneration deterministic;
    /// `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// How many destination proposals to try per commodity before giving up
    /// with an unreachable-class error.
    pub resample_attempts: u32,

    /// Solver time budget.  `None` lets the backend run to completion.
    pub time_limit: Option<Duration>,
}

impl Default for PlanParams {
    /// Defaults matching the reference deployment: capacities in
    /// [30, 70] km/h, required speeds in [20, 50] km/h.
    fn default() -> Self {
        Self {
            capacity_kmh:      SpeedRange::new(30.0, 70.0),
            required_kmh:      SpeedRange::new(20.0, 50.0),
            costs:             CostTable::default(),
            time_weight:       1.0,
            seed:              None,
            resample_attempts: 32,
            time_limit:        None,
        }
    }
}

impl PlanParams {
    /// Reject invalid configuration before any sampling or solving.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.capacity_kmh.is_valid() {
            return Err(ConfigError::CapacityRange {
                min: self.capacity_kmh.min_kmh,
                max: self.capacity_kmh.max_kmh,
            });
        }
        if !self.required_kmh.is_valid() {
            return Err(ConfigError::SpeedRange {
                min: self.required_kmh.min_kmh,
                max: self.required_kmh.max_kmh,
            });
        }
        for &class in &Severity::ALL {
            let cost = self.costs.unit_cost(class);
            if !(cost >= 0.0 && cost.is_finite()) {
                return Err(ConfigError::NegativeCost { class, cost });
            }
        }
        if !(self.time_weight >= 0.0 && self.time_weight.is_finite()) {
            return Err(ConfigError::TimeWeight { value: self.time_weight });
        }
        Ok(())
    }
}
