//! Permissive, field-optional mirror of the request schema (§6.2).
//!
//! Deserializing straight into [`crate::types::ProductionRequest`] would make
//! a missing/mistyped field a transport-level JSON error instead of the
//! `validation_error` envelope the design requires -- every field here is
//! `Option` so the validator (§4.1) can run its own "top-level fields
//! present" check as step one and list every other problem it finds
//! afterwards, rather than aborting at the deserializer.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub profit_per_unit: Option<f64>,
    pub cost_per_unit: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceInput {
    pub name: Option<String>,
    pub available_capacity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceUsageInput {
    pub product_name: Option<String>,
    pub resource_name: Option<String>,
    pub usage_per_unit: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemandConstraintInput {
    pub product_name: Option<String>,
    #[serde(default)]
    pub min_demand: Option<f64>,
    #[serde(default)]
    pub max_demand: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalConstraintsInput {
    #[serde(default)]
    pub min_total: Option<f64>,
    #[serde(default)]
    pub max_total: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionRequestInput {
    pub objective: Option<String>,
    pub products: Option<Vec<ProductInput>>,
    pub resources: Option<Vec<ResourceInput>>,
    pub resource_usage: Option<Vec<ResourceUsageInput>>,
    #[serde(default)]
    pub demand_constraints: Option<Vec<DemandConstraintInput>>,
    #[serde(default)]
    pub total_constraints: Option<TotalConstraintsInput>,
}
