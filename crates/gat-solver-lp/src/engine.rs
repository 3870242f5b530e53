//! The actual solve: translates an [`LpModel`] into a `good_lp` problem over
//! the HiGHS backend, runs it, and maps the outcome back to the adapter's
//! solver-agnostic status.

use std::collections::HashMap;

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};

use crate::cancel::CancellationToken;
use crate::error::AdapterError;
use crate::model::{LinExpr, LpModel, NamedConstraint, ObjectiveSense, Sense, VarKind};

/// The engine's verdict on a solve, restricted to the values the capability
/// contract (§6.4 of the design) promises: `optimal | infeasible | unbounded |
/// engine_error(status_code)`.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineStatus {
    Optimal,
    Infeasible,
    Unbounded,
    EngineError(String),
}

/// Everything the result assembler needs to read back from a solve.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: EngineStatus,
    pub objective_value: f64,
    pub values: HashMap<String, f64>,
}

impl SolveOutcome {
    pub fn value_of(&self, var: &str) -> f64 {
        self.values.get(var).copied().unwrap_or(0.0)
    }
}

/// Build a fresh `good_lp` variable table for `vars`, returning the table
/// alongside a name -> `Variable` index. Kept separate from solving so the
/// IIS deletion filter can reuse it across many re-solves of the same model.
fn build_vars(vars: &[crate::model::VarSpec]) -> (ProblemVariables, HashMap<String, Variable>) {
    let mut table = ProblemVariables::new();
    let mut index = HashMap::with_capacity(vars.len());
    for spec in vars {
        let builder = match spec.kind {
            VarKind::Continuous => variable().min(spec.lb).max(spec.ub),
            VarKind::Binary => variable().binary(),
        };
        let handle = table.add(builder.name(spec.name.clone()));
        index.insert(spec.name.clone(), handle);
    }
    (table, index)
}

fn to_expression(expr: &LinExpr, index: &HashMap<String, Variable>) -> Expression {
    let mut out = Expression::from(0.0);
    for (coeff, name) in expr.terms() {
        let var = index
            .get(name)
            .unwrap_or_else(|| panic!("unknown variable '{name}' referenced in expression"));
        out += *coeff * *var;
    }
    out
}

fn apply_constraint<P: SolverModel>(mut problem: P, row: &NamedConstraint, index: &HashMap<String, Variable>) -> P {
    let expr = to_expression(&row.expr, index);
    let rhs = row.rhs;
    problem = match row.sense {
        Sense::Le => problem.with(constraint!(expr <= rhs)),
        Sense::Ge => problem.with(constraint!(expr >= rhs)),
        Sense::Eq => problem.with(constraint!(expr == rhs)),
    };
    problem
}

fn map_resolution_error(err: ResolutionError) -> EngineStatus {
    match err {
        ResolutionError::Infeasible => EngineStatus::Infeasible,
        ResolutionError::Unbounded => EngineStatus::Unbounded,
        ResolutionError::Other(msg) => EngineStatus::EngineError(AdapterError::Engine(msg.to_string()).to_string()),
        ResolutionError::Str(msg) => EngineStatus::EngineError(AdapterError::Engine(msg).to_string()),
        other => EngineStatus::EngineError(AdapterError::Engine(format!("{other:?}")).to_string()),
    }
}

/// Solve `model` over every one of its constraints.
pub fn solve(model: &LpModel, cancel: &CancellationToken) -> SolveOutcome {
    solve_subset(model, &[], cancel)
}

/// Solve `model` with the named constraints in `excluded` dropped. Used by
/// the IIS deletion filter; the production/VRP solve paths always call
/// [`solve`] with an empty exclusion set.
pub fn solve_subset(model: &LpModel, excluded: &[&str], cancel: &CancellationToken) -> SolveOutcome {
    if cancel.is_cancelled() {
        return SolveOutcome {
            status: EngineStatus::EngineError(AdapterError::Cancelled.to_string()),
            objective_value: 0.0,
            values: HashMap::new(),
        };
    }

    let Some((sense, objective_expr)) = model.objective() else {
        return SolveOutcome {
            status: EngineStatus::EngineError(
                AdapterError::NoObjective(model.display_name().to_string()).to_string(),
            ),
            objective_value: 0.0,
            values: HashMap::new(),
        };
    };

    let (table, index) = build_vars(model.vars());
    let objective = to_expression(objective_expr, &index);

    let mut problem = match sense {
        ObjectiveSense::Maximize => table.maximise(objective).using(highs),
        ObjectiveSense::Minimize => table.minimise(objective).using(highs),
    };

    // Forward the capability contract's numeric knobs (§6.4) into HiGHS's own
    // option surface; good_lp's shared `SolverModel` trait has no equivalent,
    // so these go through the HiGHS-specific `set_option` builder.
    let params = model.params();
    problem = problem.set_option("output_flag", params.output_enabled);
    if params.numeric_focus {
        problem = problem
            .set_option("primal_feasibility_tolerance", params.feasibility_tol)
            .set_option("dual_feasibility_tolerance", params.feasibility_tol)
            .set_option("mip_feasibility_tolerance", params.feasibility_tol);
    }

    for row in model.constraints_excluding(excluded) {
        problem = apply_constraint(problem, row, &index);
    }

    match problem.solve() {
        Ok(solution) => {
            let values = index
                .iter()
                .map(|(name, var)| (name.clone(), solution.value(*var)))
                .collect();
            let objective_value = eval_objective(objective_expr, &index, &solution);
            SolveOutcome {
                status: EngineStatus::Optimal,
                objective_value,
                values,
            }
        }
        Err(err) => SolveOutcome {
            status: map_resolution_error(err),
            objective_value: 0.0,
            values: HashMap::new(),
        },
    }
}

fn eval_objective(
    expr: &LinExpr,
    index: &HashMap<String, Variable>,
    solution: &impl Solution,
) -> f64 {
    expr.terms()
        .iter()
        .map(|(coeff, name)| coeff * solution.value(*index.get(name).expect("known variable")))
        .sum()
}

/// Classical deletion-filter IIS: starting from every named row in `model`,
/// tentatively drop each constraint and re-solve; a constraint stays dropped
/// only if the model remains infeasible without it, otherwise it is restored.
/// What survives every round is the irreducible infeasible subset.
///
/// Demand and total-production bounds are encoded as variable bounds rather
/// than named rows (mirroring the source formulation this is grounded on),
/// so they can never appear here -- only resource rows and the optional
/// total-min/total-max rows are candidates.
pub fn compute_iis(model: &LpModel, cancel: &CancellationToken) -> Vec<String> {
    let mut remaining: Vec<String> = model.constraint_names();
    let mut dropped: Vec<String> = Vec::new();

    loop {
        if cancel.is_cancelled() {
            break;
        }
        let mut changed = false;
        let candidates = remaining.clone();
        for name in candidates {
            if cancel.is_cancelled() {
                break;
            }
            let mut excluded: Vec<&str> = dropped.iter().map(String::as_str).collect();
            excluded.push(&name);
            let outcome = solve_subset(model, &excluded, cancel);
            if matches!(outcome.status, EngineStatus::Infeasible) {
                // Still infeasible without this row: it is not required, drop it for good.
                dropped.push(name.clone());
                remaining.retain(|c| c != &name);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    remaining
}
