//! Solver-agnostic MILP problem data model.
//!
//! A `MilpProblem` is plain data: variable specs, linear constraints, and an
//! objective (coefficients on the variables plus a constant offset).  It
//! carries no solver handles, so it can be built once and handed to any
//! [`MilpBackend`][crate::MilpBackend], inspected in tests, or dumped for
//! debugging.

/// Index of a decision variable within one `MilpProblem`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VarId(pub u32);

impl VarId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One decision variable: objective coefficient, bounds, integrality.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VarSpec {
    pub obj_coef: f64,
    pub lower: f64,
    pub upper: f64,
    pub integer: bool,
}

impl VarSpec {
    /// A binary indicator variable.
    pub fn binary(obj_coef: f64) -> Self {
        Self { obj_coef, lower: 0.0, upper: 1.0, integer: true }
    }

    /// A variable pinned to zero.  Used to rule an arc out for a commodity
    /// while keeping the (commodity, arc) → variable layout dense.
    pub fn fixed_zero(obj_coef: f64) -> Self {
        Self { obj_coef, lower: 0.0, upper: 0.0, integer: true }
    }

    /// `true` if the bounds force this variable to a single value.
    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
}

/// Comparison operator of a linear constraint.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ConstraintOp {
    Eq,
    Le,
    Ge,
}

/// `Σ terms ⋈ rhs` over the problem's variables.
#[derive(Clone, Debug)]
pub struct LinearConstraint {
    pub terms: Vec<(VarId, f64)>,
    pub op: ConstraintOp,
    pub rhs: f64,
}

/// A minimization MILP: variables, constraints, objective offset.
///
/// The offset carries objective terms that do not depend on any variable
/// (here: the per-commodity unit costs, charged unconditionally).  Backends
/// must include it in the objective value they report.
#[derive(Clone, Debug, Default)]
pub struct MilpProblem {
    pub vars: Vec<VarSpec>,
    pub constraints: Vec<LinearConstraint>,
    pub objective_offset: f64,
}

impl MilpProblem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_var(&mut self, spec: VarSpec) -> VarId {
        let id = VarId(self.vars.len() as u32);
        self.vars.push(spec);
        id
    }

    pub fn add_constraint(&mut self, terms: Vec<(VarId, f64)>, op: ConstraintOp, rhs: f64) {
        self.constraints.push(LinearConstraint { terms, op, rhs });
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluate the objective for a full assignment (offset included).
    ///
    /// Used by tests and by backends that return raw variable values.
    pub fn objective_value(&self, assignment: &[f64]) -> f64 {
        debug_assert_eq!(assignment.len(), self.vars.len());
        self.objective_offset
            + self
                .vars
                .iter()
                .zip(assignment)
                .map(|(spec, &x)| spec.obj_coef * x)
                .sum::<f64>()
    }
}
