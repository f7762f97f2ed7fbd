//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `route_legs.csv` — one row per traversed arc;
//! - `route_summaries.csv` — one row per commodity.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ems_plan::DispatchPlan;

use crate::row::{RouteLegRow, RouteSummaryRow};
use crate::writer::PlanWriter;
use crate::OutputResult;

/// Writes dispatch plans to two CSV files.
pub struct CsvWriter {
    legs:      Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut legs = Writer::from_path(dir.join("route_legs.csv"))?;
        legs.write_record([
            "flow_id",
            "severity",
            "leg_seq",
            "from_node",
            "to_node",
            "from_lat",
            "from_lon",
            "to_lat",
            "to_lon",
            "length_m",
            "capacity_kmh",
            "effective_kmh",
            "minutes",
        ])?;

        let mut summaries = Writer::from_path(dir.join("route_summaries.csv"))?;
        summaries.write_record([
            "flow_id",
            "severity",
            "ambulance",
            "origin",
            "destination",
            "required_kmh",
            "legs",
            "minutes",
            "cost",
        ])?;

        Ok(Self { legs, summaries, finished: false })
    }

    fn write_leg(&mut self, row: &RouteLegRow) -> OutputResult<()> {
        self.legs.write_record(&[
            row.flow_id.to_string(),
            row.severity.to_string(),
            row.leg_seq.to_string(),
            row.from_node.to_string(),
            row.to_node.to_string(),
            row.from_lat.to_string(),
            row.from_lon.to_string(),
            row.to_lat.to_string(),
            row.to_lon.to_string(),
            row.length_m.to_string(),
            row.capacity_kmh.to_string(),
            row.effective_kmh.to_string(),
            row.minutes.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RouteSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.flow_id.to_string(),
            row.severity.to_string(),
            row.ambulance.to_string(),
            row.origin.to_string(),
            row.destination.to_string(),
            row.required_kmh.to_string(),
            row.legs.to_string(),
            row.minutes.to_string(),
            row.cost.to_string(),
        ])?;
        Ok(())
    }
}

impl PlanWriter for CsvWriter {
    fn write_plan(&mut self, plan: &DispatchPlan) -> OutputResult<()> {
        for route in &plan.routes {
            self.write_summary(&RouteSummaryRow::from_route(route))?;
            for (seq, leg) in route.legs.iter().enumerate() {
                self.write_leg(&RouteLegRow::from_leg(route, seq, leg))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.legs.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
