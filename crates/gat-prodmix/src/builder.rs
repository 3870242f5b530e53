//! LP model builder (C2, §4.2). Translates a validated [`ProductionRequest`]
//! into a solver-agnostic [`LpModel`].
//!
//! `honor_demand` is the one axis the two registered optimizers differ on:
//! the basic optimizer always builds with demand bounds ignored (every
//! product's bounds stay `[0, UNBOUNDED]`), while the demand-constrained
//! optimizer applies each product's `DemandConstraint` to its variable
//! bounds. Everything else -- objective, resource rows, total-production
//! row, numeric tolerances -- is identical between the two, so there is
//! exactly one builder function rather than two near-duplicate ones.

use gat_solver_lp::model::UNBOUNDED;
use gat_solver_lp::{LinExpr, LpModel, ObjectiveSense, Sense};

use crate::types::{Objective, ProductionRequest};

pub const PRODUCT_VAR_PREFIX: &str = "product:";
pub const RESOURCE_ROW_PREFIX: &str = "resource:";
pub const TOTAL_MIN_ROW: &str = "total:min";
pub const TOTAL_MAX_ROW: &str = "total:max";

pub fn product_var(name: &str) -> String {
    format!("{PRODUCT_VAR_PREFIX}{name}")
}

pub fn resource_row(name: &str) -> String {
    format!("{RESOURCE_ROW_PREFIX}{name}")
}

/// Builds the model for one production request.
pub fn build(req: &ProductionRequest, honor_demand: bool) -> LpModel {
    let mut model = LpModel::new("production-mix");
    model.set_numeric_focus(true);
    model.set_feasibility_tolerance(gat_solver_lp::tolerances::FEASIBILITY_TOL);

    for product in &req.products {
        let (lb, ub) = bounds_for(req, product.name.as_str(), honor_demand);
        model.add_continuous(&product_var(&product.name), lb, ub);
    }

    let mut objective = LinExpr::new();
    for product in &req.products {
        let coeff = match req.objective {
            Objective::MaximizeProfit => product.profit_per_unit,
            Objective::MinimizeCost => product.cost_per_unit,
        };
        objective = objective.with_term(coeff, product_var(&product.name));
    }
    let sense = match req.objective {
        Objective::MaximizeProfit => ObjectiveSense::Maximize,
        Objective::MinimizeCost => ObjectiveSense::Minimize,
    };
    model.set_objective(sense, objective);

    for resource in &req.resources {
        let mut expr = LinExpr::new();
        for product in &req.products {
            let coeff = req.usage_of(&product.name, &resource.name);
            if coeff != 0.0 {
                expr = expr.with_term(coeff, product_var(&product.name));
            }
        }
        if !expr.is_empty() {
            model.add_constraint(
                &resource_row(&resource.name),
                expr,
                Sense::Le,
                resource.available_capacity,
            );
        }
    }

    if let Some(total) = &req.total_constraints {
        let mut expr = LinExpr::new();
        for product in &req.products {
            expr = expr.with_term(1.0, product_var(&product.name));
        }
        if let Some(min_total) = total.min_total {
            if min_total > 0.0 {
                model.add_constraint(TOTAL_MIN_ROW, expr.clone(), Sense::Ge, min_total);
            }
        }
        if let Some(max_total) = total.max_total {
            if max_total > 0.0 {
                model.add_constraint(TOTAL_MAX_ROW, expr, Sense::Le, max_total);
            }
        }
    }

    model
}

/// `(lower_bound, upper_bound)` for one product's variable.
///
/// Mirrors the original's two optimizer subclasses exactly: the basic
/// optimizer never looks at `demand_constraints` at all, so every product
/// gets `[0, UNBOUNDED]` regardless of what was supplied. The
/// demand-constrained optimizer uses `max(0, min_demand)` as the lower bound
/// and `max_demand` (or unbounded, if absent) as the upper bound, clamping
/// the upper bound up to the lower bound if a caller supplied an
/// inconsistent pair (validation already rejects `min > max`, so this only
/// guards float edge cases, not a real input class).
fn bounds_for(req: &ProductionRequest, product: &str, honor_demand: bool) -> (f64, f64) {
    if !honor_demand {
        return (0.0, UNBOUNDED);
    }
    match req.demand_for(product) {
        None => (0.0, UNBOUNDED),
        Some(demand) => {
            let lb = demand.min_demand.unwrap_or(0.0).max(0.0);
            let ub = demand.max_demand.unwrap_or(UNBOUNDED);
            (lb, ub.max(lb))
        }
    }
}
