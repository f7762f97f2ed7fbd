//! Shared synthetic road network for the medtown demo.
//!
//! A 12-node network loosely laid out over central Medellín, Colombia.
//! Lengths are plausible urban road lengths in metres; swap in a real
//! network snapshot from the acquisition collaborator to run at city scale.

use ems_core::{GeoPoint, NodeId};
use ems_network::{RoadNetwork, RoadNetworkBuilder};

/// Build the 12-node demo network.
///
/// Returns `(network, base)` where `base` is the dispatch station node.
pub fn build_network() -> (RoadNetwork, NodeId) {
    let mut b = RoadNetworkBuilder::new();

    let station      = b.add_node(GeoPoint::new(6.2442, -75.5812)); // base
    let plaza        = b.add_node(GeoPoint::new(6.2518, -75.5636));
    let stadium      = b.add_node(GeoPoint::new(6.2569, -75.5903));
    let university   = b.add_node(GeoPoint::new(6.2675, -75.5686));
    let gardens      = b.add_node(GeoPoint::new(6.2707, -75.5648));
    let market       = b.add_node(GeoPoint::new(6.2462, -75.5743));
    let river_west   = b.add_node(GeoPoint::new(6.2400, -75.5900));
    let river_east   = b.add_node(GeoPoint::new(6.2350, -75.5700));
    let south_gate   = b.add_node(GeoPoint::new(6.2250, -75.5750));
    let hill_top     = b.add_node(GeoPoint::new(6.2600, -75.5550));
    let old_quarter  = b.add_node(GeoPoint::new(6.2530, -75.5720));
    let north_bridge = b.add_node(GeoPoint::new(6.2650, -75.5830));

    b.add_road(station, market, 900.0);
    b.add_road(station, river_west, 1_100.0);
    b.add_road(station, river_east, 1_400.0);
    b.add_road(market, old_quarter, 800.0);
    b.add_road(market, river_east, 1_000.0);
    b.add_road(old_quarter, plaza, 950.0);
    b.add_road(plaza, hill_top, 1_300.0);
    b.add_road(plaza, university, 1_800.0);
    b.add_road(university, gardens, 600.0);
    b.add_road(university, hill_top, 1_600.0);
    b.add_road(river_west, stadium, 1_900.0);
    b.add_road(stadium, north_bridge, 1_200.0);
    b.add_road(north_bridge, university, 1_500.0);
    b.add_road(river_east, south_gate, 1_200.0);
    b.add_road(south_gate, river_west, 2_100.0);
    b.add_road(old_quarter, stadium, 2_200.0);
    // One-way connector: the bridge ramp drops traffic toward the gardens
    // but not back.
    b.add_one_way(north_bridge, gardens, 1_000.0);

    (b.build(), station)
}
