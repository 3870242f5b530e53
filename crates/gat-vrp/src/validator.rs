//! Input validator for the CVRP entry point. There is no permissive JSON
//! mirror here -- §6.5 specifies a library-shaped function entry point, not
//! a wire schema, so the caller already supplies typed `Vec<Location>` /
//! `Vec<f64>` / etc. Validation is purely semantic: the structural checks
//! C1 performs for the production domain (missing fields, wrong types) have
//! no analogue once the caller is passing Rust values directly.
//!
//! Checks, in order, matching §3's VRP domain invariants:
//! 1. at least one location, and `depot_index` in range;
//! 2. `demands` has exactly one entry per location;
//! 3. every demand is non-negative;
//! 4. the depot's demand is zero;
//! 5. `num_vehicles ≥ 1`;
//! 6. `capacity > 0`;
//! 7. `Σ demand_i ≤ K · Q` (else trivially infeasible).

use crate::types::{Location, VrpRequest};

pub enum VrpValidationOutcome {
    Valid(VrpRequest),
    Invalid(Vec<String>),
}

#[allow(clippy::too_many_arguments)]
pub fn validate(
    locations: Vec<Location>,
    demands: Vec<f64>,
    num_vehicles: usize,
    depot_index: usize,
    capacity: f64,
) -> VrpValidationOutcome {
    let mut errors = Vec::new();

    if locations.is_empty() {
        errors.push("At least one location (the depot) is required".to_string());
    }
    if depot_index >= locations.len().max(1) {
        errors.push(format!(
            "depot_index {depot_index} is out of range for {} locations",
            locations.len()
        ));
    }
    if demands.len() != locations.len() {
        errors.push(format!(
            "demands has {} entries but there are {} locations",
            demands.len(),
            locations.len()
        ));
    }
    for (i, &d) in demands.iter().enumerate() {
        if d < 0.0 {
            errors.push(format!("Location {i} has negative demand: {d}"));
        }
    }
    if depot_index < demands.len() && demands[depot_index] != 0.0 {
        errors.push(format!(
            "The depot (index {depot_index}) must have zero demand, got {}",
            demands[depot_index]
        ));
    }
    if num_vehicles < 1 {
        errors.push("num_vehicles must be at least 1".to_string());
    }
    if capacity <= 0.0 {
        errors.push(format!("capacity must be positive, got {capacity}"));
    }

    if !errors.is_empty() {
        return VrpValidationOutcome::Invalid(errors);
    }

    let total_demand: f64 = demands.iter().sum();
    if total_demand > num_vehicles as f64 * capacity {
        errors.push(format!(
            "Total demand ({total_demand}) exceeds total fleet capacity ({} * {capacity} = {})",
            num_vehicles,
            num_vehicles as f64 * capacity
        ));
        return VrpValidationOutcome::Invalid(errors);
    }

    VrpValidationOutcome::Valid(VrpRequest {
        num_vehicles,
        depot_index,
        locations,
        demands,
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_locations() -> Vec<Location> {
        vec![
            Location { x: 0.0, y: 0.0 },
            Location { x: 10.0, y: 0.0 },
            Location { x: 0.0, y: 10.0 },
        ]
    }

    #[test]
    fn valid_instance_passes() {
        match validate(valid_locations(), vec![0.0, 5.0, 5.0], 1, 0, 20.0) {
            VrpValidationOutcome::Valid(_) => {}
            VrpValidationOutcome::Invalid(errors) => panic!("expected valid, got {errors:?}"),
        }
    }

    #[test]
    fn nonzero_depot_demand_is_rejected() {
        match validate(valid_locations(), vec![1.0, 5.0, 5.0], 1, 0, 20.0) {
            VrpValidationOutcome::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("zero demand")));
            }
            VrpValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn demand_exceeding_fleet_capacity_is_rejected() {
        match validate(valid_locations(), vec![0.0, 15.0, 15.0], 1, 0, 20.0) {
            VrpValidationOutcome::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("exceeds total fleet capacity")));
            }
            VrpValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn depot_index_out_of_range_is_rejected() {
        match validate(valid_locations(), vec![0.0, 5.0, 5.0], 1, 9, 20.0) {
            VrpValidationOutcome::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.contains("out of range")));
            }
            VrpValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }
}
