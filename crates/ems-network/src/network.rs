//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing arcs.
//! Given a `NodeId n`, its outgoing arcs occupy the index range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All arc arrays (`arc_from`, `arc_to`, `arc_length_m`, `arc_segment`) are
//! sorted by source node and indexed by `EdgeId`.  Iterating a node's
//! outgoing arcs is a contiguous memory scan — ideal for the formulation
//! builder's and extractor's inner loops.
//!
//! # Arcs vs. segments
//!
//! An undirected road contributes one **segment** and two **arcs** (one per
//! direction); a one-way road contributes one of each.  Capacity speeds are
//! assigned per segment (see [`CapacityField`][crate::CapacityField]), so
//! both directions of a road always share one capacity draw.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap the base-station coordinate supplied by the acquisition
//! collaborator onto a road node.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ems_core::{EdgeId, GeoPoint, NodeId, SegmentId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR arc adjacency ─────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing arcs of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Arc data (indexed by EdgeId = position in sorted order) ───────────
    /// Source node of each arc.  Redundant with CSR but required for cheap
    /// endpoint lookups during extraction.
    pub arc_from: Vec<NodeId>,

    /// Destination node of each arc.
    pub arc_to: Vec<NodeId>,

    /// Length of each arc in metres.
    pub arc_length_m: Vec<f32>,

    /// Physical segment of each arc.  The two arcs of an undirected road
    /// share one `SegmentId` and therefore one capacity value.
    pub arc_segment: Vec<SegmentId>,

    /// Number of physical segments (capacity vector length).
    segment_count: usize,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or arcs.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed arcs.
    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    /// Number of physical segments (one per road, regardless of direction).
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a valid index into this network.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over all `NodeId`s.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len()).map(|i| NodeId(i as u32))
    }

    /// Iterator over the `EdgeId`s of all outgoing arcs from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_arcs(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing arcs).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Endpoints `(from, to)` of an arc.
    #[inline]
    pub fn endpoints(&self, arc: EdgeId) -> (NodeId, NodeId) {
        (self.arc_from[arc.index()], self.arc_to[arc.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and roads in any order.  `build()` sorts arcs by
/// source node, constructs the CSR arrays, and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use ems_core::GeoPoint;
/// use ems_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(6.23, -75.58));
/// let c = b.add_node(GeoPoint::new(6.24, -75.57));
/// b.add_road(a, c, 1_200.0); // 1.2 km, both directions
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.arc_count(), 2);
/// assert_eq!(net.segment_count(), 1);
/// ```
pub struct RoadNetworkBuilder {
    nodes:    Vec<GeoPoint>,
    raw_arcs: Vec<RawArc>,
    segments: usize,
}

struct RawArc {
    from:     NodeId,
    to:       NodeId,
    length_m: f32,
    segment:  SegmentId,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_arcs: Vec::new(), segments: 0 }
    }

    /// Pre-allocate for the expected number of nodes and arcs to reduce
    /// reallocations when bulk-loading a network snapshot.
    pub fn with_capacity(nodes: usize, arcs: usize) -> Self {
        Self {
            nodes:    Vec::with_capacity(nodes),
            raw_arcs: Vec::with_capacity(arcs),
            segments: 0,
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    fn next_segment(&mut self) -> SegmentId {
        let id = SegmentId(self.segments as u32);
        self.segments += 1;
        id
    }

    /// Add a **one-way** road from `from` to `to`.  Returns the new segment.
    pub fn add_one_way(&mut self, from: NodeId, to: NodeId, length_m: f32) -> SegmentId {
        let segment = self.next_segment();
        self.raw_arcs.push(RawArc { from, to, length_m, segment });
        segment
    }

    /// Add an **undirected** road between `a` and `b`: one segment, two arcs
    /// sharing it.  Returns the new segment.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f32) -> SegmentId {
        let segment = self.next_segment();
        self.raw_arcs.push(RawArc { from: a, to: b, length_m, segment });
        self.raw_arcs.push(RawArc { from: b, to: a, length_m, segment });
        segment
    }

    /// Look up the position of a node added earlier (used by loaders to
    /// compute road lengths between adjacent nodes).
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn arc_count(&self) -> usize { self.raw_arcs.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(A log A) for the arc sort + O(N log N) for the
    /// R-tree bulk load, where N = nodes, A = arcs.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let arc_count = self.raw_arcs.len();

        // Sort arcs by source node for CSR construction.
        let mut raw = self.raw_arcs;
        raw.sort_unstable_by_key(|a| a.from.0);

        let arc_from:     Vec<NodeId>    = raw.iter().map(|a| a.from).collect();
        let arc_to:       Vec<NodeId>    = raw.iter().map(|a| a.to).collect();
        let arc_length_m: Vec<f32>       = raw.iter().map(|a| a.length_m).collect();
        let arc_segment:  Vec<SegmentId> = raw.iter().map(|a| a.segment).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for a in &raw {
            node_out_start[a.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, arc_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            arc_from,
            arc_to,
            arc_length_m,
            arc_segment,
            segment_count: self.segments,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
