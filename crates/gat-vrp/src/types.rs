//! Vehicle routing domain types: locations, demands, distance matrix, and
//! the reported result schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// A fully validated CVRP instance: a depot plus customer locations, each
/// location's demand (the depot's is always zero), vehicle count and
/// per-vehicle capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrpRequest {
    pub num_vehicles: usize,
    pub depot_index: usize,
    pub locations: Vec<Location>,
    pub demands: Vec<f64>,
    pub capacity: f64,
}

impl VrpRequest {
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }
}

/// Euclidean distance matrix over `locations`, zero on the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    pub fn compute(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let dx = locations[j].x - locations[i].x;
                    let dy = locations[j].y - locations[i].y;
                    distances[i * n + j] = (dx * dx + dy * dy).sqrt();
                }
            }
        }
        Self { n, distances }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VrpStatus {
    Optimal,
    NoSolutionFound,
    Error,
}

/// One vehicle's route as a sequence of location indices, starting and
/// (if it visited any customer) ending at the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub vehicle: usize,
    pub stops: Vec<usize>,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrpResult {
    pub status: VrpStatus,
    pub routes: Vec<Route>,
    pub total_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl VrpResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: VrpStatus::Error,
            routes: Vec::new(),
            total_distance: 0.0,
            message: Some(message.into()),
        }
    }

    pub fn no_solution() -> Self {
        Self {
            status: VrpStatus::NoSolutionFound,
            routes: Vec::new(),
            total_distance: 0.0,
            message: Some("No solution found".to_string()),
        }
    }
}
