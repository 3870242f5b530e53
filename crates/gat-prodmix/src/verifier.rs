//! Independent feasibility verifier (C6, §4.6).
//!
//! Recomputes everything the solve already claims to have enforced directly
//! from the request and the reported production plan, using the same
//! `resource_used`/`usage_of` helpers the builder used to construct the rows
//! in the first place -- so a bug in either the builder or the engine's
//! reported numbers shows up as a warning here rather than silently
//! shipping a plan nobody re-checked.
//!
//! Demand and total-production checks run unconditionally, regardless of
//! whether the optimizer that produced the plan honored demand bounds while
//! building the model: the basic optimizer ignores demand_constraints when
//! building, so a plan that violates them is expected to surface a
//! feasibility warning here, not pass silently.

use crate::types::{ProductionRequest, ProductionResult, ProductionStatus};

const EPSILON: f64 = gat_solver_lp::tolerances::FEASIBILITY_TOL;

/// Checks `result` against `req`, appending to `feasibility_warnings` and
/// downgrading an `Optimal` status to `SolutionWarning` if any warning fired.
/// No-op for any status other than `Optimal` -- a solution that wasn't
/// optimal in the first place gets no further feasibility scrutiny.
pub fn verify(req: &ProductionRequest, result: &mut ProductionResult) {
    if result.status != ProductionStatus::Optimal {
        return;
    }
    let Some(plan) = result.production_plan.clone() else {
        return;
    };

    let mut warnings = Vec::new();

    for (product, &quantity) in &plan {
        if quantity > 0.0 && quantity < EPSILON {
            warnings.push(format!(
                "Product '{product}' has very small production quantity ({quantity}), might be numerical precision issue"
            ));
        }
    }

    for resource in &req.resources {
        let calculated = req.resource_used(&plan, &resource.name);
        if let Some(util) = result
            .resource_utilization
            .as_ref()
            .and_then(|u| u.get(&resource.name))
        {
            if (calculated - util.used).abs() > EPSILON {
                warnings.push(format!(
                    "Resource '{}' calculated usage ({calculated}) differs from reported usage ({})",
                    resource.name, util.used
                ));
            }
        }
        if calculated > resource.available_capacity + EPSILON {
            warnings.push(format!(
                "Resource '{}' usage ({calculated}) exceeds available capacity ({})",
                resource.name, resource.available_capacity
            ));
        }
    }

    for (product, &quantity) in &plan {
        if let Some(demand) = req.demand_for(product) {
            if let Some(min_demand) = demand.min_demand {
                if quantity < min_demand - EPSILON {
                    warnings.push(format!(
                        "Product '{product}' production ({quantity}) violates minimum demand constraint ({min_demand})"
                    ));
                }
            }
            if let Some(max_demand) = demand.max_demand {
                if quantity > max_demand + EPSILON {
                    warnings.push(format!(
                        "Product '{product}' production ({quantity}) violates maximum demand constraint ({max_demand})"
                    ));
                }
            }
        }
    }

    if let Some(total) = &req.total_constraints {
        let total_production: f64 = plan.values().sum();
        if let Some(min_total) = total.min_total {
            if total_production < min_total - EPSILON {
                warnings.push(format!(
                    "Total production ({total_production}) violates minimum total constraint ({min_total})"
                ));
            }
        }
        if let Some(max_total) = total.max_total {
            if total_production > max_total + EPSILON {
                warnings.push(format!(
                    "Total production ({total_production}) violates maximum total constraint ({max_total})"
                ));
            }
        }
    }

    if !warnings.is_empty() {
        result.status = ProductionStatus::SolutionWarning;
        result.feasibility_warnings = Some(warnings);
    }
}
