//! Bundled MILP backend built on the pure-Rust `microlp` crate.
//!
//! `microlp` runs simplex plus branch-and-bound in-process with no system
//! solver libraries, which keeps the toolkit self-contained.  It has no
//! mid-solve interruption hook, so this backend runs every model to
//! completion and never reports `Timeout` itself; the `time_limit` option is
//! honored by backends that support interruption.

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use crate::backend::{MilpBackend, SolveOptions, SolveOutcome};
use crate::problem::{ConstraintOp, MilpProblem};

/// The default solver backend.
#[derive(Default)]
pub struct MicrolpBackend;

impl MilpBackend for MicrolpBackend {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, problem: &MilpProblem, _options: &SolveOptions) -> SolveOutcome {
        let mut model = Problem::new(OptimizationDirection::Minimize);

        let vars: Vec<Variable> = problem
            .vars
            .iter()
            .map(|spec| {
                if spec.integer {
                    model.add_integer_var(spec.obj_coef, (spec.lower as i32, spec.upper as i32))
                } else {
                    model.add_var(spec.obj_coef, (spec.lower, spec.upper))
                }
            })
            .collect();

        for constraint in &problem.constraints {
            let terms: Vec<(Variable, f64)> = constraint
                .terms
                .iter()
                .map(|&(v, coef)| (vars[v.index()], coef))
                .collect();
            let op = match constraint.op {
                ConstraintOp::Eq => ComparisonOp::Eq,
                ConstraintOp::Le => ComparisonOp::Le,
                ConstraintOp::Ge => ComparisonOp::Ge,
            };
            model.add_constraint(terms, op, constraint.rhs);
        }

        match model.solve() {
            Ok(solution) => {
                let assignment: Vec<f64> = vars.iter().map(|&v| solution[v]).collect();
                SolveOutcome::optimal(
                    solution.objective() + problem.objective_offset,
                    assignment,
                )
            }
            Err(microlp::Error::Infeasible) => SolveOutcome::infeasible(),
            Err(other) => SolveOutcome::error(format!("microlp: {other}")),
        }
    }
}
