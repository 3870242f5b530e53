//! Optimizer registry (C7, §4.7). Grounded on the OPF solver registry
//! elsewhere in this workspace: a flat `HashMap<String, Arc<dyn _>>` built
//! once and read thereafter, registered IDs matching the original system's
//! `'basic'`/`'demand-constrained'` dispatch keys.
//!
//! Rust has no runtime class scanning to replicate the original's
//! reflection-based auto-registration, so discovery here is opt-in: a
//! caller builds its own boxed optimizers and hands them to
//! `register_discovered`, rather than the registry scanning a module path
//! for subclasses.

use std::collections::HashMap;
use std::sync::Arc;

use gat_solver_lp::{solve, CancellationToken};

use crate::assembler::assemble;
use crate::builder::build;
use crate::error::{ProdMixError, ProdMixResult};
use crate::types::{ProductionRequest, ProductionResult};
use crate::verifier::verify;

/// One registered production optimizer variant.
pub trait ProductionOptimizer: Send + Sync {
    /// Dispatch key, e.g. `"basic"` or `"demand-constrained"`.
    fn id(&self) -> &str;

    /// Whether this variant applies `demand_constraints` to variable bounds
    /// when building the model.
    fn honor_demand(&self) -> bool;

    /// Builds, solves, verifies and assembles a result for one request.
    /// The default implementation is shared by every registered variant --
    /// only `honor_demand` differs between them.
    fn solve(&self, req: &ProductionRequest, cancel: &CancellationToken) -> ProductionResult {
        let model = build(req, self.honor_demand());
        let outcome = solve(&model, cancel);
        let mut result = assemble(req, &model, outcome, cancel);
        verify(req, &mut result);
        result
    }
}

/// Ignores `demand_constraints` entirely; every product's bound stays
/// `[0, UNBOUNDED]` regardless of what the request supplied.
pub struct BasicOptimizer;

impl ProductionOptimizer for BasicOptimizer {
    fn id(&self) -> &str {
        "basic"
    }
    fn honor_demand(&self) -> bool {
        false
    }
}

/// Applies each product's demand bounds to its variable.
pub struct DemandConstrainedOptimizer;

impl ProductionOptimizer for DemandConstrainedOptimizer {
    fn id(&self) -> &str {
        "demand-constrained"
    }
    fn honor_demand(&self) -> bool {
        true
    }
}

/// Holds all registered optimizer variants, keyed by dispatch ID.
#[derive(Default)]
pub struct OptimizerRegistry {
    optimizers: HashMap<String, Arc<dyn ProductionOptimizer>>,
}

impl OptimizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the two built-in variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(BasicOptimizer))
            .expect("built-in optimizer IDs are distinct");
        registry
            .register(Arc::new(DemandConstrainedOptimizer))
            .expect("built-in optimizer IDs are distinct");
        registry
    }

    /// Registers an already-instantiated optimizer. Rejects a duplicate ID
    /// rather than silently overwriting an existing registration.
    pub fn register(&mut self, optimizer: Arc<dyn ProductionOptimizer>) -> ProdMixResult<()> {
        let id = optimizer.id().to_string();
        if self.optimizers.contains_key(&id) {
            return Err(ProdMixError::DuplicateOptimizer(id));
        }
        self.optimizers.insert(id, optimizer);
        Ok(())
    }

    /// Registers a batch of caller-discovered optimizers in one call --
    /// the opt-in stand-in for the original's reflection-based discovery.
    pub fn register_discovered(
        &mut self,
        optimizers: Vec<Arc<dyn ProductionOptimizer>>,
    ) -> ProdMixResult<()> {
        for optimizer in optimizers {
            self.register(optimizer)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> ProdMixResult<Arc<dyn ProductionOptimizer>> {
        self.optimizers
            .get(id)
            .cloned()
            .ok_or_else(|| ProdMixError::UnknownOptimizer(id.to_string()))
    }

    pub fn list(&self) -> Vec<&str> {
        self.optimizers.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Objective, Product, Resource, ResourceUsage};

    fn sample_request() -> ProductionRequest {
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

    #[test]
    fn builtins_are_registered_under_expected_ids() {
        let registry = OptimizerRegistry::with_builtins();
        let mut ids = registry.list();
        ids.sort();
        assert_eq!(ids, vec!["basic", "demand-constrained"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = OptimizerRegistry::with_builtins();
        assert!(registry.get("does-not-exist").is_err());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = OptimizerRegistry::with_builtins();
        let err = registry.register(Arc::new(BasicOptimizer)).unwrap_err();
        assert!(matches!(err, ProdMixError::DuplicateOptimizer(_)));
    }

    #[test]
    fn basic_optimizer_solves_scenario_one() {
        let registry = OptimizerRegistry::with_builtins();
        let optimizer = registry.get("basic").unwrap();
        let result = optimizer.solve(&sample_request(), &CancellationToken::new());
        assert!((result.objective_value.unwrap() - 250.0).abs() < 1e-6);
    }
}
