//! Per-segment capacity speed vector.
//!
//! The capacity speed of a road segment is the maximum speed it can sustain
//! under its current congestion level.  Capacities are not part of
//! [`RoadNetwork`] — they live in their own value so that "recalculate
//! capacities" builds a fresh `CapacityField` and swaps it in wholesale.
//! Nothing mutates an existing field element-wise; a solve holding a
//! reference (or `Arc`) to one can never observe a partial update.

use ems_core::{ConfigError, EdgeId, PlanRng, SegmentId, SpeedRange};

use crate::error::{NetworkError, NetworkResult};
use crate::network::RoadNetwork;

/// Capacity speeds in km/h, indexed by [`SegmentId`].
///
/// Both arcs of an undirected road read the same entry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityField {
    kmh: Vec<f32>,
}

impl CapacityField {
    /// Draw an independent uniform capacity from `range` for every segment.
    ///
    /// Rejects an empty or non-positive range before sampling anything.
    /// Deterministic for a seeded `rng`.
    pub fn generate(
        network: &RoadNetwork,
        range: SpeedRange,
        rng: &mut PlanRng,
    ) -> NetworkResult<Self> {
        if !range.is_valid() {
            return Err(NetworkError::Config(ConfigError::CapacityRange {
                min: range.min_kmh,
                max: range.max_kmh,
            }));
        }
        let kmh = (0..network.segment_count())
            .map(|_| range.sample(rng))
            .collect();
        Ok(Self { kmh })
    }

    /// Build from explicit per-segment values (external data, tests).
    ///
    /// The vector length must match the network's segment count.
    pub fn from_values(network: &RoadNetwork, kmh: Vec<f32>) -> NetworkResult<Self> {
        if kmh.len() != network.segment_count() {
            return Err(NetworkError::CapacityLength {
                expected: network.segment_count(),
                got: kmh.len(),
            });
        }
        Ok(Self { kmh })
    }

    /// Capacity speed of a segment.
    #[inline]
    pub fn segment_kmh(&self, segment: SegmentId) -> f32 {
        self.kmh[segment.index()]
    }

    /// Capacity speed seen by a directed arc (its segment's capacity).
    #[inline]
    pub fn arc_kmh(&self, network: &RoadNetwork, arc: EdgeId) -> f32 {
        self.kmh[network.arc_segment[arc.index()].index()]
    }

    pub fn len(&self) -> usize {
        self.kmh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmh.is_empty()
    }

    /// Raw per-segment values, for bounds checks and export.
    pub fn as_slice(&self) -> &[f32] {
        &self.kmh
    }
}
