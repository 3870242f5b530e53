//! Input validator (C1, §4.1). Operates on the permissive [`ProductionRequestInput`]
//! and either returns the full list of problems found or the strict,
//! request-scoped [`ProductionRequest`] that the rest of the pipeline builds on.
//!
//! Checks run in the order spec.md lists them and accumulate every applicable
//! error -- only the top-level required-fields check (step 1) short-circuits
//! the rest, since every later check indexes into fields that may not exist
//! at all when that check fails.

use std::collections::HashSet;

use crate::input::ProductionRequestInput;
use crate::types::{
    DemandConstraint, Objective, Product, ProductionRequest, Resource, ResourceUsage,
    TotalConstraints,
};

/// Outcome of validating a request.
pub enum ValidationOutcome {
    Valid(ProductionRequest),
    Invalid(Vec<String>),
}

pub fn validate(input: &ProductionRequestInput) -> ValidationOutcome {
    let mut errors = Vec::new();

    // 1. Top-level fields present.
    if input.objective.is_none() {
        errors.push("Missing required field: objective".to_string());
    }
    if input.products.is_none() {
        errors.push("Missing required field: products".to_string());
    }
    if input.resources.is_none() {
        errors.push("Missing required field: resources".to_string());
    }
    if input.resource_usage.is_none() {
        errors.push("Missing required field: resource_usage".to_string());
    }
    if !errors.is_empty() {
        return ValidationOutcome::Invalid(errors);
    }

    let raw_products = input.products.as_ref().unwrap();
    let raw_resources = input.resources.as_ref().unwrap();
    let raw_usage = input.resource_usage.as_ref().unwrap();

    // 2. Objective tag.
    let objective = Objective::parse(input.objective.as_deref().unwrap());
    if objective.is_none() {
        errors.push(format!(
            "Objective must be either 'maximize_profit' or 'minimize_cost', got '{}'",
            input.objective.as_deref().unwrap()
        ));
    }

    // 3. Products.
    let mut product_names: HashSet<String> = HashSet::new();
    let mut products = Vec::with_capacity(raw_products.len());
    for p in raw_products {
        let Some(name) = p.name.clone() else {
            errors.push("Each product must have a name".to_string());
            continue;
        };
        if !product_names.insert(name.clone()) {
            errors.push(format!("Duplicate product name: {name}"));
        }

        let profit = match p.profit_per_unit {
            None => {
                errors.push(format!("Product '{name}' is missing profit_per_unit"));
                0.0
            }
            Some(v) if v < 0.0 => {
                errors.push(format!(
                    "Product '{name}' has negative profit_per_unit: {v}"
                ));
                v
            }
            Some(v) => v,
        };
        let cost = match p.cost_per_unit {
            None => {
                errors.push(format!("Product '{name}' is missing cost_per_unit"));
                0.0
            }
            Some(v) if v < 0.0 => {
                errors.push(format!("Product '{name}' has negative cost_per_unit: {v}"));
                v
            }
            Some(v) => v,
        };

        products.push(Product {
            name,
            profit_per_unit: profit,
            cost_per_unit: cost,
        });
    }

    // 4. Resources.
    let mut resource_names: HashSet<String> = HashSet::new();
    let mut resources = Vec::with_capacity(raw_resources.len());
    for r in raw_resources {
        let Some(name) = r.name.clone() else {
            errors.push("Each resource must have a name".to_string());
            continue;
        };
        if !resource_names.insert(name.clone()) {
            errors.push(format!("Duplicate resource name: {name}"));
        }

        let capacity = match r.available_capacity {
            None => {
                errors.push(format!("Resource '{name}' is missing available_capacity"));
                0.0
            }
            Some(v) if v < 0.0 => {
                errors.push(format!(
                    "Resource '{name}' has negative available_capacity: {v}"
                ));
                v
            }
            Some(v) => v,
        };

        resources.push(Resource {
            name,
            available_capacity: capacity,
        });
    }

    // 5. Resource usage rows.
    let mut resource_usage = Vec::with_capacity(raw_usage.len());
    let mut products_with_usage: HashSet<String> = HashSet::new();
    for ru in raw_usage {
        let product_ok = match &ru.product_name {
            None => {
                errors.push("Each resource usage entry must specify a product_name".to_string());
                false
            }
            Some(name) if !product_names.contains(name) => {
                errors.push(format!("Resource usage references unknown product: {name}"));
                false
            }
            Some(name) => {
                products_with_usage.insert(name.clone());
                true
            }
        };
        let resource_ok = match &ru.resource_name {
            None => {
                errors.push("Each resource usage entry must specify a resource_name".to_string());
                false
            }
            Some(name) if !resource_names.contains(name) => {
                errors.push(format!("Resource usage references unknown resource: {name}"));
                false
            }
            Some(_) => true,
        };
        let usage = match ru.usage_per_unit {
            None => {
                errors.push(format!(
                    "Resource usage for {} and {} is missing usage_per_unit",
                    ru.product_name.as_deref().unwrap_or("unknown"),
                    ru.resource_name.as_deref().unwrap_or("unknown")
                ));
                0.0
            }
            Some(v) if v < 0.0 => {
                errors.push(format!(
                    "Resource usage for {} and {} has negative usage_per_unit: {v}",
                    ru.product_name.as_deref().unwrap_or("unknown"),
                    ru.resource_name.as_deref().unwrap_or("unknown")
                ));
                v
            }
            Some(v) => v,
        };

        if product_ok && resource_ok {
            resource_usage.push(ResourceUsage {
                product_name: ru.product_name.clone().unwrap(),
                resource_name: ru.resource_name.clone().unwrap(),
                usage_per_unit: usage,
            });
        }
    }

    // 6. Every declared product appears in at least one resource-usage row.
    for name in &product_names {
        if !products_with_usage.contains(name) {
            errors.push(format!("Product '{name}' has no resource usage defined"));
        }
    }

    // 7. Demand constraints.
    let demand_constraints = input.demand_constraints.as_ref().map(|list| {
        let mut out = Vec::with_capacity(list.len());
        for dc in list {
            match &dc.product_name {
                None => errors.push("Each demand constraint must specify a product_name".to_string()),
                Some(name) if !product_names.contains(name) => {
                    errors.push(format!("Demand constraint references unknown product: {name}"))
                }
                Some(_) => {}
            }
            if let Some(v) = dc.min_demand {
                if v < 0.0 {
                    errors.push(format!(
                        "Product '{}' has negative min_demand: {v}",
                        dc.product_name.as_deref().unwrap_or("unknown")
                    ));
                }
            }
            if let Some(v) = dc.max_demand {
                if v < 0.0 {
                    errors.push(format!(
                        "Product '{}' has negative max_demand: {v}",
                        dc.product_name.as_deref().unwrap_or("unknown")
                    ));
                }
            }
            if let (Some(min_d), Some(max_d)) = (dc.min_demand, dc.max_demand) {
                if min_d > max_d {
                    errors.push(format!(
                        "Product '{}' has min_demand ({min_d}) greater than max_demand ({max_d})",
                        dc.product_name.as_deref().unwrap_or("unknown")
                    ));
                }
            }
            out.push(DemandConstraint {
                product_name: dc.product_name.clone().unwrap_or_default(),
                min_demand: dc.min_demand,
                max_demand: dc.max_demand,
            });
        }
        out
    });

    // 8. Total constraints.
    let total_constraints = input.total_constraints.as_ref().map(|tc| {
        if let Some(v) = tc.min_total {
            if v < 0.0 {
                errors.push(format!("Total constraints has negative min_total: {v}"));
            }
        }
        if let Some(v) = tc.max_total {
            if v < 0.0 {
                errors.push(format!("Total constraints has negative max_total: {v}"));
            }
        }
        if let (Some(min_t), Some(max_t)) = (tc.min_total, tc.max_total) {
            if min_t > max_t {
                errors.push(format!(
                    "Total constraints has min_total ({min_t}) greater than max_total ({max_t})"
                ));
            }
        }
        TotalConstraints {
            min_total: tc.min_total,
            max_total: tc.max_total,
        }
    });

    if !errors.is_empty() {
        return ValidationOutcome::Invalid(errors);
    }

    ValidationOutcome::Valid(ProductionRequest {
        objective: objective.unwrap(),
        products,
        resources,
        resource_usage,
        demand_constraints,
        total_constraints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ProductInput, ResourceInput, ResourceUsageInput};

    fn valid_input() -> ProductionRequestInput {
        ProductionRequestInput {
            objective: Some("maximize_profit".to_string()),
            products: Some(vec![ProductInput {
                name: Some("A".to_string()),
                profit_per_unit: Some(3.0),
                cost_per_unit: Some(1.0),
            }]),
            resources: Some(vec![ResourceInput {
                name: Some("R".to_string()),
                available_capacity: Some(100.0),
            }]),
            resource_usage: Some(vec![ResourceUsageInput {
                product_name: Some("A".to_string()),
                resource_name: Some("R".to_string()),
                usage_per_unit: Some(1.0),
            }]),
            demand_constraints: None,
            total_constraints: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        match validate(&valid_input()) {
            ValidationOutcome::Valid(_) => {}
            ValidationOutcome::Invalid(errors) => panic!("expected valid, got {errors:?}"),
        }
    }

    #[test]
    fn missing_top_level_field_short_circuits() {
        let mut input = valid_input();
        input.resources = None;
        match validate(&input) {
            ValidationOutcome::Invalid(errors) => {
                assert_eq!(errors, vec!["Missing required field: resources".to_string()]);
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn product_without_resource_usage_is_rejected() {
        let mut input = valid_input();
        input.products.as_mut().unwrap().push(ProductInput {
            name: Some("B".to_string()),
            profit_per_unit: Some(1.0),
            cost_per_unit: Some(1.0),
        });
        match validate(&input) {
            ValidationOutcome::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("'B' has no resource usage")));
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn accumulates_multiple_errors_instead_of_stopping_at_first() {
        let mut input = valid_input();
        input.objective = Some("bogus".to_string());
        input.products.as_mut().unwrap()[0].profit_per_unit = Some(-1.0);
        match validate(&input) {
            ValidationOutcome::Invalid(errors) => assert!(errors.len() >= 2),
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }
}
