//! # gat-prodmix: production-mix linear allocation optimizer
//!
//! Validates a production request, builds and solves the corresponding LP
//! over [`gat_solver_lp`], independently re-verifies the reported plan
//! against the original request, and assembles the public result envelope.
//! Two registered optimizer variants differ only in whether demand bounds
//! are applied to the model (`basic` ignores them, `demand-constrained`
//! applies them) -- see [`registry`].

pub mod analysis;
pub mod assembler;
pub mod builder;
pub mod error;
pub mod input;
pub mod registry;
pub mod types;
pub mod validator;
pub mod verifier;

pub use error::{ProdMixError, ProdMixResult};
pub use input::ProductionRequestInput;
pub use registry::{BasicOptimizer, DemandConstrainedOptimizer, OptimizerRegistry, ProductionOptimizer};
pub use types::{
    DemandConstraint, InfeasibleConstraints, Objective, Product, ProductionRequest,
    ProductionResult, ProductionStatus, Resource, ResourceUsage, ResourceUtilization,
    TotalConstraints,
};
pub use validator::{validate, ValidationOutcome};

use gat_solver_lp::CancellationToken;

/// End-to-end entry point: validate `input`, dispatch to the registered
/// optimizer named `optimizer_id`, and return the assembled result. A
/// validation failure never reaches the optimizer at all.
pub fn run(
    registry: &OptimizerRegistry,
    optimizer_id: &str,
    input: &ProductionRequestInput,
    cancel: &CancellationToken,
) -> ProdMixResult<ProductionResult> {
    let req = match validate(input) {
        ValidationOutcome::Invalid(errors) => return Ok(ProductionResult::validation_error(errors)),
        ValidationOutcome::Valid(req) => req,
    };
    let optimizer = registry.get(optimizer_id)?;
    Ok(optimizer.solve(&req, cancel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ProductInput, ResourceInput, ResourceUsageInput};

    fn request_input() -> ProductionRequestInput {
        ProductionRequestInput {
            objective: Some("maximize_profit".to_string()),
            products: Some(vec![
                ProductInput {
                    name: Some("A".to_string()),
                    profit_per_unit: Some(3.0),
                    cost_per_unit: Some(1.0),
                },
                ProductInput {
                    name: Some("B".to_string()),
                    profit_per_unit: Some(5.0),
                    cost_per_unit: Some(2.0),
                },
            ]),
            resources: Some(vec![ResourceInput {
                name: Some("R".to_string()),
                available_capacity: Some(100.0),
            }]),
            resource_usage: Some(vec![
                ResourceUsageInput {
                    product_name: Some("A".to_string()),
                    resource_name: Some("R".to_string()),
                    usage_per_unit: Some(1.0),
                },
                ResourceUsageInput {
                    product_name: Some("B".to_string()),
                    resource_name: Some("R".to_string()),
                    usage_per_unit: Some(2.0),
                },
            ]),
            demand_constraints: None,
            total_constraints: None,
        }
    }

    #[test]
    fn end_to_end_basic_run_matches_scenario_one() {
        let registry = OptimizerRegistry::with_builtins();
        let result = run(&registry, "basic", &request_input(), &CancellationToken::new()).unwrap();
        assert_eq!(result.status, ProductionStatus::Optimal);
        assert!((result.objective_value.unwrap() - 250.0).abs() < 1e-6);
    }

    #[test]
    fn validation_failure_short_circuits_before_optimizer_lookup() {
        let registry = OptimizerRegistry::with_builtins();
        let mut input = request_input();
        input.objective = Some("bogus".to_string());
        let result = run(&registry, "basic", &input, &CancellationToken::new()).unwrap();
        assert_eq!(result.status, ProductionStatus::ValidationError);
    }

    #[test]
    fn unknown_optimizer_id_is_an_error() {
        let registry = OptimizerRegistry::with_builtins();
        let err = run(&registry, "nonexistent", &request_input(), &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, ProdMixError::UnknownOptimizer(_)));
    }
}
