//! Severity classes and the severity → response-unit dispatch table.
//!
//! Each emergency belongs to one of three severity classes.  The class
//! determines which ambulance type responds and what that unit costs per
//! dispatch.  The coupling is a fixed lookup (no trait objects, no
//! subclass hierarchy): [`CostTable::profile`] is the single source of
//! truth for severity → `{ ambulance class, unit cost }`.

use std::fmt;

// ── Severity ──────────────────────────────────────────────────────────────────

/// Triage class of one emergency trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Non-urgent transfer; basic life support unit.
    Mild,
    /// Urgent but stable; intermediate care unit.
    Moderate,
    /// Life-threatening; mobile intensive-care unit.
    Critical,
}

impl Severity {
    /// All classes in generation order.  Commodity generation iterates this
    /// array, so the order is part of the deterministic-output contract.
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Critical];

    /// Human-readable label, useful for CSV/GeoJSON column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild     => "mild",
            Severity::Moderate => "moderate",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AmbulanceClass ────────────────────────────────────────────────────────────

/// Response-unit type dispatched for a given severity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmbulanceClass {
    /// Basic life support.
    Basic,
    /// Intermediate care.
    Intermediate,
    /// Mobile intensive-care unit.
    MobileIcu,
}

impl AmbulanceClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AmbulanceClass::Basic        => "basic",
            AmbulanceClass::Intermediate => "intermediate",
            AmbulanceClass::MobileIcu    => "mobile_icu",
        }
    }
}

impl fmt::Display for AmbulanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CostTable ─────────────────────────────────────────────────────────────────

/// What one dispatch of a given class looks like: the unit sent and its
/// operational cost (charged once per trip, independent of path length).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DispatchProfile {
    pub ambulance: AmbulanceClass,
    pub unit_cost: f64,
}

/// Per-severity unit operational costs.
///
/// Costs must be non-negative; [`PlanParams::validate`][crate::PlanParams]
/// rejects a table with negative entries before any solve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    pub mild: f64,
    pub moderate: f64,
    pub critical: f64,
}

impl CostTable {
    /// Unit operational cost for one dispatch of the given class.
    pub fn unit_cost(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Mild     => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Critical => self.critical,
        }
    }

    /// The fixed severity → response-unit mapping plus this table's cost.
    pub fn profile(&self, severity: Severity) -> DispatchProfile {
        let ambulance = match severity {
            Severity::Mild     => AmbulanceClass::Basic,
            Severity::Moderate => AmbulanceClass::Intermediate,
            Severity::Critical => AmbulanceClass::MobileIcu,
        };
        DispatchProfile { ambulance, unit_cost: self.unit_cost(severity) }
    }

    /// `true` if every entry is non-negative.
    pub fn is_valid(&self) -> bool {
        Severity::ALL.iter().all(|&s| self.unit_cost(s) >= 0.0)
    }
}

impl Default for CostTable {
    /// Reference tariffs: 100 / 250 / 500 per dispatch.
    fn default() -> Self {
        CostTable { mild: 100.0, moderate: 250.0, critical: 500.0 }
    }
}
