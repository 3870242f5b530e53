//! The linear-expression and model-building surface the production and VRP
//! builders target. Kept independent of `good_lp`'s `Expression`/`Variable`
//! types so a model can be rebuilt from scratch against a reduced constraint
//! set (the IIS deletion filter needs exactly that).

use std::collections::HashMap;

/// Sentinel used in place of a literal `f64::INFINITY` bound. HiGHS (like
/// most simplex/branch-and-bound engines) treats bounds at or beyond this
/// magnitude as unbounded; using the same finite sentinel throughout avoids
/// NaN/overflow surprises that a true `f64::INFINITY` bound can trigger deep
/// in the engine's presolve.
pub const UNBOUNDED: f64 = 1e30;

/// A variable's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Continuous, bounded `[lb, ub]`.
    Continuous,
    /// Binary `{0, 1}`.
    Binary,
}

/// Constraint / objective sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Le,
    Ge,
    Eq,
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Maximize,
    Minimize,
}

/// A linear expression over named variables: `Σ coeff_i * var_i`.
#[derive(Debug, Clone, Default)]
pub struct LinExpr {
    terms: Vec<(f64, String)>,
}

impl LinExpr {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a `coeff * var` term. Repeated terms on the same variable are
    /// summed at evaluation time, matching ordinary linear-expression algebra.
    pub fn with_term(mut self, coeff: f64, var: impl Into<String>) -> Self {
        self.terms.push((coeff, var.into()));
        self
    }

    pub fn terms(&self) -> &[(f64, String)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<(f64, String)> for LinExpr {
    fn from_iter<T: IntoIterator<Item = (f64, String)>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct VarSpec {
    pub name: String,
    pub kind: VarKind,
    pub lb: f64,
    pub ub: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct NamedConstraint {
    pub name: String,
    pub expr: LinExpr,
    pub sense: Sense,
    pub rhs: f64,
}

/// Numeric solver parameters exposed by the capability contract (§6.4).
#[derive(Debug, Clone, Copy)]
pub struct NumericParams {
    pub numeric_focus: bool,
    pub feasibility_tol: f64,
    pub output_enabled: bool,
}

impl Default for NumericParams {
    fn default() -> Self {
        Self {
            numeric_focus: true,
            feasibility_tol: crate::tolerances::FEASIBILITY_TOL,
            output_enabled: false,
        }
    }
}

/// A solver-agnostic model: named variables, named rows, one objective.
///
/// Construction is append-only; `LpModel` never mutates a variable or
/// constraint once added, so the same model can be solved repeatedly (e.g.
/// during IIS deletion-filtering) by asking for a solve over a subset of its
/// named constraints.
pub struct LpModel {
    name: String,
    vars: Vec<VarSpec>,
    var_index: HashMap<String, usize>,
    constraints: Vec<NamedConstraint>,
    objective: Option<(ObjectiveSense, LinExpr)>,
    params: NumericParams,
}

impl LpModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            var_index: HashMap::new(),
            constraints: Vec::new(),
            objective: None,
            params: NumericParams::default(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Add a continuous variable with the given bounds. Panics on a duplicate
    /// name, matching the registry's "duplicates rejected" posture elsewhere
    /// in this workspace -- builders are expected to generate unique names.
    pub fn add_continuous(&mut self, name: impl Into<String>, lb: f64, ub: f64) -> &str {
        self.add_var(name, VarKind::Continuous, lb, ub)
    }

    /// Add a binary variable (bounds fixed at `[0, 1]` by the engine).
    pub fn add_binary(&mut self, name: impl Into<String>) -> &str {
        self.add_var(name, VarKind::Binary, 0.0, 1.0)
    }

    fn add_var(&mut self, name: impl Into<String>, kind: VarKind, lb: f64, ub: f64) -> &str {
        let name = name.into();
        assert!(
            !self.var_index.contains_key(&name),
            "duplicate variable name '{name}' in model '{}'",
            self.name
        );
        self.var_index.insert(name.clone(), self.vars.len());
        self.vars.push(VarSpec { name, kind, lb, ub });
        &self.vars.last().unwrap().name
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.var_index.contains_key(name)
    }

    /// Add a named linear constraint (`≤`, `≥`, `=`).
    pub fn add_constraint(&mut self, name: impl Into<String>, expr: LinExpr, sense: Sense, rhs: f64) {
        self.constraints.push(NamedConstraint {
            name: name.into(),
            expr,
            sense,
            rhs,
        });
    }

    pub fn set_objective(&mut self, sense: ObjectiveSense, expr: LinExpr) {
        self.objective = Some((sense, expr));
    }

    pub fn set_numeric_focus(&mut self, enabled: bool) {
        self.params.numeric_focus = enabled;
    }

    pub fn set_feasibility_tolerance(&mut self, tol: f64) {
        self.params.feasibility_tol = tol;
    }

    pub fn set_output_enabled(&mut self, enabled: bool) {
        self.params.output_enabled = enabled;
    }

    pub fn params(&self) -> NumericParams {
        self.params
    }

    pub(crate) fn vars(&self) -> &[VarSpec] {
        &self.vars
    }

    pub(crate) fn objective(&self) -> Option<&(ObjectiveSense, LinExpr)> {
        self.objective.as_ref()
    }

    pub fn constraint_names(&self) -> Vec<String> {
        self.constraints.iter().map(|c| c.name.clone()).collect()
    }

    pub(crate) fn constraints(&self) -> &[NamedConstraint] {
        &self.constraints
    }

    /// All constraints except those named in `excluded`, preserving order.
    pub(crate) fn constraints_excluding(&self, excluded: &[&str]) -> Vec<&NamedConstraint> {
        self.constraints
            .iter()
            .filter(|c| !excluded.contains(&c.name.as_str()))
            .collect()
    }
}
