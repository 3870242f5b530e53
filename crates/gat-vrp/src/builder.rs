//! CVRP model builder: `x[i,j,k]` binary arc variables, `u[i,k]` continuous
//! MTZ potentials, and the visit/flow/depot/capacity/subtour-elimination
//! constraints that tie them together.

use gat_solver_lp::model::UNBOUNDED;
use gat_solver_lp::{LinExpr, LpModel, ObjectiveSense, Sense};

use crate::types::{DistanceMatrix, VrpRequest};

pub fn arc_var(i: usize, j: usize, k: usize) -> String {
    format!("arc:{i}:{j}:{k}")
}

pub fn potential_var(i: usize, k: usize) -> String {
    format!("pot:{i}:{k}")
}

pub fn build(req: &VrpRequest, dist: &DistanceMatrix) -> LpModel {
    let mut model = LpModel::new("vehicle-routing");
    model.set_numeric_focus(true);
    model.set_feasibility_tolerance(gat_solver_lp::tolerances::FEASIBILITY_TOL);

    let n = req.num_locations();
    let depot = req.depot_index;

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            for k in 0..req.num_vehicles {
                model.add_binary(&arc_var(i, j, k));
            }
        }
    }
    for i in 0..n {
        for k in 0..req.num_vehicles {
            model.add_continuous(&potential_var(i, k), 0.0, UNBOUNDED);
        }
    }

    let mut objective = LinExpr::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = dist.get(i, j);
            if d != 0.0 {
                for k in 0..req.num_vehicles {
                    objective = objective.with_term(d, arc_var(i, j, k));
                }
            }
        }
    }
    model.set_objective(ObjectiveSense::Minimize, objective);

    // Every customer is visited exactly once.
    for j in 0..n {
        if j == depot {
            continue;
        }
        let mut expr = LinExpr::new();
        for i in 0..n {
            if i == j {
                continue;
            }
            for k in 0..req.num_vehicles {
                expr = expr.with_term(1.0, arc_var(i, j, k));
            }
        }
        model.add_constraint(&format!("visit_once:{j}"), expr, Sense::Eq, 1.0);
    }

    // Flow conservation: a vehicle that enters a node must also exit it.
    for k in 0..req.num_vehicles {
        for h in 0..n {
            let mut expr = LinExpr::new();
            for i in 0..n {
                if i != h {
                    expr = expr.with_term(1.0, arc_var(i, h, k));
                }
            }
            for j in 0..n {
                if j != h {
                    expr = expr.with_term(-1.0, arc_var(h, j, k));
                }
            }
            model.add_constraint(&format!("flow_conservation:{h}:{k}"), expr, Sense::Eq, 0.0);
        }
    }

    // Each vehicle departs and returns to the depot at most once.
    for k in 0..req.num_vehicles {
        let mut depart = LinExpr::new();
        for j in 0..n {
            if j != depot {
                depart = depart.with_term(1.0, arc_var(depot, j, k));
            }
        }
        model.add_constraint(&format!("depot_departs:{k}"), depart, Sense::Le, 1.0);

        let mut arrive = LinExpr::new();
        for i in 0..n {
            if i != depot {
                arrive = arrive.with_term(1.0, arc_var(i, depot, k));
            }
        }
        model.add_constraint(&format!("depot_returns:{k}"), arrive, Sense::Le, 1.0);
    }

    // MTZ subtour elimination and capacity bounds on the cumulative-demand potentials.
    for k in 0..req.num_vehicles {
        model.add_constraint(
            &format!("mtz_depot_zero:{k}"),
            LinExpr::new().with_term(1.0, potential_var(depot, k)),
            Sense::Eq,
            0.0,
        );

        for i in 0..n {
            if i == depot {
                continue;
            }
            model.add_constraint(
                &format!("mtz_capacity_upper:{i}:{k}"),
                LinExpr::new().with_term(1.0, potential_var(i, k)),
                Sense::Le,
                req.capacity,
            );
            model.add_constraint(
                &format!("mtz_demand_lower:{i}:{k}"),
                LinExpr::new().with_term(1.0, potential_var(i, k)),
                Sense::Ge,
                req.demands[i],
            );
        }

        for i in 0..n {
            if i == depot {
                continue;
            }
            for j in 0..n {
                if j == depot || i == j {
                    continue;
                }
                // u[j,k] >= u[i,k] + demand[j] - capacity*(1 - x[i,j,k])
                // <=> u[j,k] - u[i,k] - capacity*x[i,j,k] >= demand[j] - capacity
                let expr = LinExpr::new()
                    .with_term(1.0, potential_var(j, k))
                    .with_term(-1.0, potential_var(i, k))
                    .with_term(-req.capacity, arc_var(i, j, k));
                model.add_constraint(
                    &format!("mtz_subtour:{i}:{j}:{k}"),
                    expr,
                    Sense::Ge,
                    req.demands[j] - req.capacity,
                );
            }
        }
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    fn four_node_request() -> VrpRequest {
        VrpRequest {
            num_vehicles: 2,
            depot_index: 0,
            locations: vec![
                Location { x: 0.0, y: 0.0 },
                Location { x: 1.0, y: 0.0 },
                Location { x: 1.0, y: 1.0 },
                Location { x: 0.0, y: 1.0 },
            ],
            demands: vec![0.0, 5.0, 5.0, 5.0],
            capacity: 10.0,
        }
    }

    #[test]
    fn builds_expected_variable_and_row_counts() {
        let req = four_node_request();
        let dist = DistanceMatrix::compute(&req.locations);
        let model = build(&req, &dist);
        // 4*3 off-diagonal arcs * 2 vehicles + 4 locations * 2 vehicles potentials
        assert!(model.has_var(&arc_var(0, 1, 0)));
        assert!(model.has_var(&potential_var(1, 0)));
        assert!(!model.constraint_names().is_empty());
    }
}
