//! Result assembler (C5, §4.5). Turns a solved [`LpModel`] plus its
//! [`SolveOutcome`] into the public [`ProductionResult`] envelope: rounds
//! small production values to zero, computes resource utilization and total
//! production from the reported variable values, and on infeasibility asks
//! the adapter's deletion filter for the offending named rows.

use std::collections::BTreeMap;

use gat_solver_lp::{compute_iis, CancellationToken, EngineStatus, LpModel, SolveOutcome};

use gat_solver_lp::tolerances::PLAN_CLAMP;

use crate::builder::product_var;
use crate::types::{InfeasibleConstraints, ProductionRequest, ProductionResult, ProductionStatus, ResourceUtilization};

pub fn assemble(
    req: &ProductionRequest,
    model: &LpModel,
    outcome: SolveOutcome,
    cancel: &CancellationToken,
) -> ProductionResult {
    match outcome.status {
        EngineStatus::Optimal => {
            let mut production_plan = BTreeMap::new();
            for product in &req.products {
                let mut value = outcome.value_of(&product_var(&product.name));
                if value.abs() < PLAN_CLAMP {
                    value = 0.0;
                }
                production_plan.insert(product.name.clone(), value);
            }

            let total_production: f64 = production_plan.values().sum();

            let mut resource_utilization = BTreeMap::new();
            for resource in &req.resources {
                let used = req.resource_used(&production_plan, &resource.name);
                let utilization_pct = if resource.available_capacity > 0.0 {
                    used / resource.available_capacity * 100.0
                } else {
                    0.0
                };
                resource_utilization.insert(
                    resource.name.clone(),
                    ResourceUtilization {
                        used,
                        available: resource.available_capacity,
                        utilization_pct,
                    },
                );
            }

            ProductionResult {
                status: ProductionStatus::Optimal,
                objective_value: Some(outcome.objective_value),
                production_plan: Some(production_plan),
                resource_utilization: Some(resource_utilization),
                total_production: Some(total_production),
                solver_message: "Optimal solution found".to_string(),
                feasibility_warnings: None,
                infeasible_constraints: None,
                validation_errors: None,
            }
        }
        EngineStatus::Infeasible => {
            let iis = compute_iis(model, cancel);
            ProductionResult {
                status: ProductionStatus::Infeasible,
                objective_value: None,
                production_plan: None,
                resource_utilization: None,
                total_production: None,
                solver_message: "The model is infeasible".to_string(),
                feasibility_warnings: None,
                infeasible_constraints: Some(InfeasibleConstraints::from_iis(iis)),
                validation_errors: None,
            }
        }
        EngineStatus::Unbounded => ProductionResult {
            status: ProductionStatus::Unbounded,
            objective_value: None,
            production_plan: None,
            resource_utilization: None,
            total_production: None,
            solver_message: "The model is unbounded (no finite optimal solution exists)".to_string(),
            feasibility_warnings: None,
            infeasible_constraints: None,
            validation_errors: None,
        },
        EngineStatus::EngineError(message) => {
            ProductionResult::engine_error(format!("Optimization status: {message}"))
        }
    }
}
