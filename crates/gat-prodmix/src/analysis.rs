//! Supplemental reporting (C5b, §3.1/§4.5.1). Neither function changes a
//! [`ProductionResult`]; both are read-only views a caller can ask for in
//! addition to the solve itself -- the financial/resource/product rollups
//! `analyze()` produces, and the human-readable multi-line report
//! `format_report()` produces, mirror the two reporting helpers the original
//! system offered alongside its solver.

use std::fmt::Write as _;

use serde::Serialize;

use crate::types::{ProductionRequest, ProductionResult, ProductionStatus};

const BOTTLENECK_THRESHOLD: f64 = 0.95;
const UNDERUTILIZED_THRESHOLD: f64 = 0.5;
const UNUSED_PRODUCT_TOL: f64 = 1e-6;

#[derive(Debug, Clone, Serialize)]
pub struct Financials {
    pub total_profit: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit_margin_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcePressure {
    pub resource: String,
    pub utilization_pct: f64,
    /// Unused capacity for an underutilized resource, or remaining headroom
    /// for a bottleneck -- same quantity, reported under whichever label
    /// the bucket it landed in uses.
    pub capacity: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceAnalysis {
    pub bottlenecks: Vec<ResourcePressure>,
    pub underutilized: Vec<ResourcePressure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductAnalysis {
    pub unused_products: Vec<String>,
    pub unused_count: usize,
    pub total_products: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultAnalysis {
    pub financials: Option<Financials>,
    pub resources: Option<ResourceAnalysis>,
    pub products: Option<ProductAnalysis>,
}

/// Builds the financial/resource/product rollup for an optimal (or
/// warned-optimal) result. Returns `None` for any other status, mirroring
/// the original's "return the bare result unchanged" behavior for
/// non-optimal solves -- there is nothing meaningful to analyze.
pub fn analyze(req: &ProductionRequest, result: &ProductionResult) -> Option<ResultAnalysis> {
    if !matches!(
        result.status,
        ProductionStatus::Optimal | ProductionStatus::SolutionWarning
    ) {
        return None;
    }

    let plan = result.production_plan.as_ref();

    let financials = plan.map(|plan| {
        let mut total_profit = 0.0;
        let mut total_cost = 0.0;
        let mut revenue = 0.0;
        for product in &req.products {
            let quantity = plan.get(&product.name).copied().unwrap_or(0.0);
            if quantity > 0.0 {
                let profit = product.profit_per_unit * quantity;
                let cost = product.cost_per_unit * quantity;
                total_profit += profit;
                total_cost += cost;
                revenue += profit + cost;
            }
        }
        let profit_margin_pct = if revenue > 0.0 {
            total_profit / revenue * 100.0
        } else {
            0.0
        };
        Financials {
            total_profit,
            total_cost,
            revenue,
            profit_margin_pct,
        }
    });

    let resources = result.resource_utilization.as_ref().map(|util| {
        let mut bottlenecks = Vec::new();
        let mut underutilized = Vec::new();
        for (resource, details) in util {
            let utilization = details.utilization_pct / 100.0;
            if utilization >= BOTTLENECK_THRESHOLD {
                bottlenecks.push(ResourcePressure {
                    resource: resource.clone(),
                    utilization_pct: utilization * 100.0,
                    capacity: (1.0 - utilization) * details.available,
                });
            } else if utilization < UNDERUTILIZED_THRESHOLD {
                underutilized.push(ResourcePressure {
                    resource: resource.clone(),
                    utilization_pct: utilization * 100.0,
                    capacity: (1.0 - utilization) * details.available,
                });
            }
        }
        ResourceAnalysis {
            bottlenecks,
            underutilized,
        }
    });

    let products = plan.map(|plan| {
        let unused_products: Vec<String> = req
            .products
            .iter()
            .filter(|p| plan.get(&p.name).copied().unwrap_or(0.0) <= UNUSED_PRODUCT_TOL)
            .map(|p| p.name.clone())
            .collect();
        ProductAnalysis {
            unused_count: unused_products.len(),
            total_products: req.products.len(),
            unused_products,
        }
    });

    Some(ResultAnalysis {
        financials,
        resources,
        products,
    })
}

/// Renders a result as the multi-line human-readable report a CLI or log
/// line would show, branching on status exactly as the original's formatter
/// did: validation errors and solver errors get a short message-only block,
/// infeasible reports list the infeasible rows, and optimal (or
/// warned-optimal) results get the full plan, resource utilization and any
/// feasibility warnings, with the production plan sorted by descending
/// quantity and zero-quantity products omitted.
pub fn format_report(result: &ProductionResult) -> String {
    let mut out = String::new();

    match result.status {
        ProductionStatus::ValidationError => {
            let _ = writeln!(out, "VALIDATION ERROR");
            let _ = writeln!(out, "Message: {}", result.solver_message);
            let _ = writeln!(out, "\nValidation Errors:");
            if let Some(errors) = &result.validation_errors {
                for (i, error) in errors.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {error}", i + 1);
                }
            }
            return out.trim_end().to_string();
        }
        ProductionStatus::Error => {
            let _ = writeln!(out, "SOLVER ERROR");
            let _ = writeln!(out, "Message: {}", result.solver_message);
            return out.trim_end().to_string();
        }
        ProductionStatus::Infeasible => {
            let _ = writeln!(out, "INFEASIBLE PROBLEM");
            let _ = writeln!(out, "Message: {}", result.solver_message);
            if let Some(constraints) = &result.infeasible_constraints {
                let _ = writeln!(out, "\nInfeasible Constraints:");
                match constraints {
                    crate::types::InfeasibleConstraints::Names(names) => {
                        for name in names {
                            let _ = writeln!(out, "  - {name}");
                        }
                    }
                    crate::types::InfeasibleConstraints::Unknown(_) => {
                        let _ = writeln!(out, "  - Unknown");
                    }
                }
            }
            return out.trim_end().to_string();
        }
        ProductionStatus::Unbounded => {
            let _ = writeln!(out, "UNBOUNDED PROBLEM");
            let _ = writeln!(out, "Message: {}", result.solver_message);
            return out.trim_end().to_string();
        }
        ProductionStatus::SolutionWarning => {
            let _ = writeln!(out, "WARNING: Solution found but with potential issues");
            if let Some(warnings) = &result.feasibility_warnings {
                let _ = writeln!(out, "\nWarnings:");
                for (i, warning) in warnings.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {warning}", i + 1);
                }
            }
            let _ = writeln!(out);
        }
        ProductionStatus::Optimal => {}
    }

    let _ = writeln!(out, "OPTIMAL SOLUTION");
    let _ = writeln!(
        out,
        "Objective Value: {:.4}",
        result.objective_value.unwrap_or(0.0)
    );

    let _ = writeln!(out, "\nProduction Plan:");
    if let Some(plan) = &result.production_plan {
        let mut sorted: Vec<(&String, &f64)> = plan.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (product, quantity) in sorted {
            if *quantity > 0.0 {
                let _ = writeln!(out, "  {product}: {quantity:.4}");
            }
        }
    }

    if let Some(util) = &result.resource_utilization {
        let _ = writeln!(out, "\nResource Utilization:");
        for (resource, details) in util {
            let _ = writeln!(
                out,
                "  {resource}: {:.2}/{:.2} ({:.1}%)",
                details.used, details.available, details.utilization_pct
            );
        }
    }

    if result.status == ProductionStatus::SolutionWarning {
        if let Some(warnings) = &result.feasibility_warnings {
            if !warnings.is_empty() {
                let _ = writeln!(out, "\nWarnings:");
                for (i, warning) in warnings.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {warning}", i + 1);
                }
            }
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Objective, Product, Resource, ResourceUsage, ResourceUtilization};
    use std::collections::BTreeMap;

    fn request() -> ProductionRequest {
        ProductionRequest {
            objective: Objective::MaximizeProfit,
            products: vec![
                Product {
                    name: "A".to_string(),
                    profit_per_unit: 3.0,
                    cost_per_unit: 1.0,
                },
                Product {
                    name: "B".to_string(),
                    profit_per_unit: 5.0,
                    cost_per_unit: 2.0,
                },
            ],
            resources: vec![Resource {
                name: "R".to_string(),
                available_capacity: 100.0,
            }],
            resource_usage: vec![
                ResourceUsage {
                    product_name: "A".to_string(),
                    resource_name: "R".to_string(),
                    usage_per_unit: 1.0,
                },
                ResourceUsage {
                    product_name: "B".to_string(),
                    resource_name: "R".to_string(),
                    usage_per_unit: 2.0,
                },
            ],
            demand_constraints: None,
            total_constraints: None,
        }
    }

    fn result_with_plan() -> ProductionResult {
        let mut plan = BTreeMap::new();
        plan.insert("A".to_string(), 0.0);
        plan.insert("B".to_string(), 50.0);
        let mut util = BTreeMap::new();
        util.insert(
            "R".to_string(),
            ResourceUtilization {
                used: 100.0,
                available: 100.0,
                utilization_pct: 100.0,
            },
        );
        ProductionResult {
            status: ProductionStatus::Optimal,
            objective_value: Some(250.0),
            production_plan: Some(plan),
            resource_utilization: Some(util),
            total_production: Some(50.0),
            solver_message: "Optimal solution found".to_string(),
            feasibility_warnings: None,
            infeasible_constraints: None,
            validation_errors: None,
        }
    }

    #[test]
    fn analyze_reports_financials_and_bottleneck() {
        let req = request();
        let result = result_with_plan();
        let analysis = analyze(&req, &result).unwrap();
        let financials = analysis.financials.unwrap();
        assert!((financials.total_profit - 250.0).abs() < 1e-9);
        let resources = analysis.resources.unwrap();
        assert_eq!(resources.bottlenecks.len(), 1);
        assert_eq!(resources.bottlenecks[0].resource, "R");
        let products = analysis.products.unwrap();
        assert_eq!(products.unused_count, 1);
        assert_eq!(products.unused_products, vec!["A".to_string()]);
    }

    #[test]
    fn format_report_lists_nonzero_products_only() {
        let report = format_report(&result_with_plan());
        assert!(report.contains("B: 50.0000"));
        assert!(!report.contains("A: "));
    }
}
