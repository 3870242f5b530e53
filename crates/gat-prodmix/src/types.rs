//! Production domain types (§3 of the design): products, resources, usage
//! rows, demand/total constraints, and the reported result schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `maximize_profit` or `minimize_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    MaximizeProfit,
    MinimizeCost,
}

impl Objective {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "maximize_profit" => Some(Self::MaximizeProfit),
            "minimize_cost" => Some(Self::MinimizeCost),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub profit_per_unit: f64,
    pub cost_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub available_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub product_name: String,
    pub resource_name: String,
    pub usage_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandConstraint {
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_demand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_demand: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalConstraints {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_total: Option<f64>,
}

/// A fully validated, request-scoped production problem. Only ever produced
/// by the validator (§4.1) -- there is no public constructor that bypasses
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    pub objective: Objective,
    pub products: Vec<Product>,
    pub resources: Vec<Resource>,
    pub resource_usage: Vec<ResourceUsage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub demand_constraints: Option<Vec<DemandConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_constraints: Option<TotalConstraints>,
}

impl ProductionRequest {
    /// `usage_per_unit` for `(product, resource)`, or zero for an absent row.
    pub fn usage_of(&self, product: &str, resource: &str) -> f64 {
        self.resource_usage
            .iter()
            .find(|u| u.product_name == product && u.resource_name == resource)
            .map(|u| u.usage_per_unit)
            .unwrap_or(0.0)
    }

    /// Recomputes `Σ_p usage[p,r]·plan[p]` for one resource directly from the
    /// request and a production plan -- used by both the assembler and the
    /// independent feasibility verifier so they can never drift apart.
    pub fn resource_used(&self, plan: &BTreeMap<String, f64>, resource: &str) -> f64 {
        self.products
            .iter()
            .map(|p| self.usage_of(&p.name, resource) * plan.get(&p.name).copied().unwrap_or(0.0))
            .sum()
    }

    pub fn demand_for(&self, product: &str) -> Option<&DemandConstraint> {
        self.demand_constraints
            .as_deref()
            .and_then(|list| list.iter().find(|d| d.product_name == product))
    }
}

/// `status` values a production solve can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    Optimal,
    SolutionWarning,
    Infeasible,
    Unbounded,
    Error,
    ValidationError,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    pub used: f64,
    pub available: f64,
    pub utilization_pct: f64,
}

/// `infeasible_constraints` is `[string]` when the IIS is non-empty, or the
/// sentinel `"Unknown"` when the engine found no offending rows (or cannot
/// compute an IIS at all) -- callers depend on the field's presence to tell
/// "we tried" apart from "not infeasible".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfeasibleConstraints {
    Names(Vec<String>),
    Unknown(String),
}

impl InfeasibleConstraints {
    pub fn unknown() -> Self {
        Self::Unknown("Unknown".to_string())
    }

    pub fn from_iis(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::unknown()
        } else {
            Self::Names(names)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionResult {
    pub status: ProductionStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub objective_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub production_plan: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resource_utilization: Option<BTreeMap<String, ResourceUtilization>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_production: Option<f64>,
    pub solver_message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub feasibility_warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub infeasible_constraints: Option<InfeasibleConstraints>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub validation_errors: Option<Vec<String>>,
}

impl ProductionResult {
    pub fn validation_error(errors: Vec<String>) -> Self {
        Self {
            status: ProductionStatus::ValidationError,
            objective_value: None,
            production_plan: None,
            resource_utilization: None,
            total_production: None,
            solver_message: "Input validation failed".to_string(),
            feasibility_warnings: None,
            infeasible_constraints: None,
            validation_errors: Some(errors),
        }
    }

    pub fn engine_error(message: impl Into<String>) -> Self {
        Self {
            status: ProductionStatus::Error,
            objective_value: None,
            production_plan: None,
            resource_utilization: None,
            total_production: None,
            solver_message: message.into(),
            feasibility_warnings: None,
            infeasible_constraints: None,
            validation_errors: None,
        }
    }
}
