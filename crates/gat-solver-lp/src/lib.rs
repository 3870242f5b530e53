//! # gat-solver-lp: capability-restricted LP/MILP solver adapter
//!
//! Wraps `good_lp` (HiGHS backend) behind the minimal surface the production
//! and VRP model builders need: named continuous/binary variables, named
//! linear constraints (`≤`, `≥`, `=`), a single linear objective, a couple of
//! numeric knobs, a blocking solve, and -- on infeasibility -- an irreducible
//! infeasible subset computed by deletion filtering, since HiGHS does not
//! expose one through this abstraction.
//!
//! HiGHS is the one backend in this workspace's `good_lp` stack that solves
//! both continuous LP and binary MILP, which the CVRP model requires; the
//! workspace's other backend (`clarabel`) is continuous-only and is left
//! available under its own feature flag for crates that only need LP.

pub mod cancel;
pub mod engine;
pub mod error;
pub mod model;
pub mod tolerances;

pub use cancel::CancellationToken;
pub use engine::{compute_iis, solve, solve_subset, EngineStatus, SolveOutcome};
pub use error::AdapterError;
pub use model::{LinExpr, LpModel, NumericParams, ObjectiveSense, Sense, VarKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-product profit max, one binding resource -- scenario 1 of the
    /// testable properties: optimum `= 250` at `{A: 0, B: 50}`.
    #[test]
    fn maximize_profit_one_binding_resource() {
        let mut model = LpModel::new("two-product");
        model.add_continuous("A", 0.0, model::UNBOUNDED);
        model.add_continuous("B", 0.0, model::UNBOUNDED);
        model.set_objective(
            ObjectiveSense::Maximize,
            LinExpr::new().with_term(3.0, "A").with_term(5.0, "B"),
        );
        model.add_constraint(
            "resource:R",
            LinExpr::new().with_term(1.0, "A").with_term(2.0, "B"),
            Sense::Le,
            100.0,
        );

        let outcome = solve(&model, &CancellationToken::new());
        assert_eq!(outcome.status, EngineStatus::Optimal);
        assert!((outcome.objective_value - 250.0).abs() < 1e-6);
        assert!(outcome.value_of("A").abs() < 1e-6);
        assert!((outcome.value_of("B") - 50.0).abs() < 1e-6);
    }

    #[test]
    fn infeasible_reports_iis_over_named_rows_only() {
        let mut model = LpModel::new("infeasible-total");
        model.add_continuous("P", 0.0, model::UNBOUNDED);
        model.set_objective(ObjectiveSense::Minimize, LinExpr::new().with_term(1.0, "P"));
        model.add_constraint("resource:R", LinExpr::new().with_term(1.0, "P"), Sense::Le, 10.0);
        model.add_constraint("total:min", LinExpr::new().with_term(1.0, "P"), Sense::Ge, 20.0);

        let outcome = solve(&model, &CancellationToken::new());
        assert_eq!(outcome.status, EngineStatus::Infeasible);

        let iis = compute_iis(&model, &CancellationToken::new());
        assert!(iis.contains(&"resource:R".to_string()));
        assert!(iis.contains(&"total:min".to_string()));
    }

    #[test]
    fn unbounded_profit_with_no_usage() {
        let mut model = LpModel::new("unbounded");
        model.add_continuous("A", 0.0, model::UNBOUNDED);
        model.set_objective(ObjectiveSense::Maximize, LinExpr::new().with_term(1.0, "A"));

        let outcome = solve(&model, &CancellationToken::new());
        assert_eq!(outcome.status, EngineStatus::Unbounded);
    }

    #[test]
    fn cancellation_short_circuits_before_solving() {
        let mut model = LpModel::new("cancelled");
        model.add_continuous("A", 0.0, 1.0);
        model.set_objective(ObjectiveSense::Maximize, LinExpr::new().with_term(1.0, "A"));

        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = solve(&model, &cancel);
        assert_eq!(outcome.status, EngineStatus::EngineError("cancelled".to_string()));
    }

    #[test]
    fn binary_variable_respects_domain() {
        let mut model = LpModel::new("binary");
        model.add_binary("x");
        model.set_objective(ObjectiveSense::Maximize, LinExpr::new().with_term(1.0, "x"));
        let outcome = solve(&model, &CancellationToken::new());
        assert_eq!(outcome.status, EngineStatus::Optimal);
        assert!((outcome.value_of("x") - 1.0).abs() < 1e-9);
    }
}
