//! Result assembler (C5, §4.5) for the VRP side: turns the solved model's
//! binary `x[i,j,k]` values into route sequences starting and ending at the
//! depot, discarding empty (depot-to-depot) routes, and sums total distance.

use gat_solver_lp::{EngineStatus, SolveOutcome};

use crate::builder::arc_var;
use crate::types::{DistanceMatrix, Route, VrpRequest, VrpResult, VrpStatus};

const ARC_THRESHOLD: f64 = 0.5;

pub fn assemble(req: &VrpRequest, dist: &DistanceMatrix, outcome: SolveOutcome) -> VrpResult {
    match outcome.status {
        EngineStatus::Optimal => {
            let mut routes = Vec::new();
            let mut total_distance = 0.0;
            for k in 0..req.num_vehicles {
                if let Some(route) = reconstruct_route(req, dist, &outcome, k) {
                    total_distance += route.distance;
                    routes.push(route);
                }
            }
            VrpResult {
                status: VrpStatus::Optimal,
                routes,
                total_distance,
                message: None,
            }
        }
        EngineStatus::Infeasible => VrpResult::no_solution(),
        EngineStatus::Unbounded => {
            VrpResult::error("The model is unbounded (no finite optimal solution exists)")
        }
        EngineStatus::EngineError(message) => VrpResult::error(format!("Optimization status: {message}")),
    }
}

/// Follows vehicle `k`'s arc-selection variables starting at the depot,
/// repeatedly choosing the unique outgoing arc with value `> 0.5` (ties
/// broken by lowest destination index for reproducible output), until
/// either the depot is returned to or no outgoing arc exists. Returns
/// `None` for a vehicle that never left the depot (route length ≤ 2).
fn reconstruct_route(
    req: &VrpRequest,
    dist: &DistanceMatrix,
    outcome: &SolveOutcome,
    vehicle: usize,
) -> Option<Route> {
    let depot = req.depot_index;
    let n = req.num_locations();

    let mut stops = vec![depot];
    let mut distance = 0.0;
    let mut current = depot;
    let mut visited_customers = 0usize;

    loop {
        let mut next: Option<usize> = None;
        for j in 0..n {
            if j == current {
                continue;
            }
            if outcome.value_of(&arc_var(current, j, vehicle)) > ARC_THRESHOLD {
                next = Some(j);
                break;
            }
        }
        let Some(next_stop) = next else {
            break;
        };
        distance += dist.get(current, next_stop);
        stops.push(next_stop);
        current = next_stop;
        if next_stop != depot {
            visited_customers += 1;
        }
        if next_stop == depot {
            break;
        }
    }

    if visited_customers == 0 {
        return None;
    }

    Some(Route {
        vehicle,
        stops,
        distance,
    })
}
