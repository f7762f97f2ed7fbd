//! The `PlanWriter` trait implemented by all backend writers.

use ems_plan::DispatchPlan;

use crate::OutputResult;

/// Trait implemented by CSV and GeoJSON writers.
pub trait PlanWriter {
    /// Export one dispatch plan.  May be called repeatedly to export
    /// successive recalculations through the same writer.
    fn write_plan(&mut self, plan: &DispatchPlan) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
