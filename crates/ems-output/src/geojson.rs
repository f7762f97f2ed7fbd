//! GeoJSON output backend.
//!
//! Produces one FeatureCollection with a LineString feature per route,
//! ready for direct rendering on a web map.  Coordinates follow the GeoJSON
//! convention: `[longitude, latitude]`.

use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use ems_plan::{DispatchPlan, Route};

use crate::writer::PlanWriter;
use crate::OutputResult;

/// Writes the most recent dispatch plan as a GeoJSON FeatureCollection.
///
/// Repeated `write_plan` calls replace the staged features; `finish`
/// serializes whatever was staged last.
pub struct GeoJsonWriter {
    path:     PathBuf,
    features: Vec<Value>,
    finished: bool,
}

impl GeoJsonWriter {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf(), features: Vec::new(), finished: false }
    }

    fn route_feature(route: &Route) -> Value {
        let mut coordinates = Vec::with_capacity(route.legs.len() + 1);
        if let Some(first) = route.legs.first() {
            coordinates.push(json!([first.from_pos.lon, first.from_pos.lat]));
        }
        coordinates.extend(
            route.legs.iter().map(|leg| json!([leg.to_pos.lon, leg.to_pos.lat])),
        );

        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "flow_id": route.commodity.id.0,
                "severity": route.commodity.severity.as_str(),
                "ambulance": route.commodity.ambulance.as_str(),
                "required_kmh": route.commodity.required_kmh,
                "destination": route.commodity.destination.0,
                "minutes": route.minutes,
                "cost": route.cost,
                "capacities_kmh": route.legs.iter().map(|l| l.capacity_kmh).collect::<Vec<_>>(),
            },
        })
    }
}

impl PlanWriter for GeoJsonWriter {
    fn write_plan(&mut self, plan: &DispatchPlan) -> OutputResult<()> {
        self.features = plan.routes.iter().map(Self::route_feature).collect();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let collection = json!({
            "type": "FeatureCollection",
            "features": self.features,
        });
        let mut file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&mut file, &collection)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}
