//! `ems-output` — dispatch plan export for the rendering collaborator.
//!
//! Two backends are provided:
//!
//! | Backend         | Files created                                        |
//! |-----------------|------------------------------------------------------|
//! | [`CsvWriter`]   | `route_legs.csv`, `route_summaries.csv`              |
//! | [`GeoJsonWriter`] | one FeatureCollection with a LineString per route  |
//!
//! Both implement [`PlanWriter`].  Rows are flat plain-data types so other
//! backends (databases, message buses) can reuse them unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ems_output::{CsvWriter, PlanWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_plan(&plan)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::GeoJsonWriter;
pub use row::{RouteLegRow, RouteSummaryRow};
pub use writer::PlanWriter;
