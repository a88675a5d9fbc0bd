//! Provides summaries of a solution for presentation layers.

#[cfg(test)]
#[path = "../../tests/unit/solver/report_test.rs"]
mod report_test;

use crate::models::common::{Coordinate, Demand, Distance};
use crate::models::problem::Problem;
use crate::models::{CenterKind, Solution};
use crate::utils::Float;

/// Upper bounds (exclusive) of store distance buckets, in miles.
const DISTANCE_BUCKET_BOUNDS: [(Distance, &str); 5] =
    [(100., "<100"), (250., "100-250"), (500., "250-500"), (1000., "500-1000"), (Distance::INFINITY, ">1000")];

/// Summarizes a single center.
#[derive(Clone, Debug, PartialEq)]
pub struct CenterSummary {
    /// Center location.
    pub coordinate: Coordinate,
    /// Center origin.
    pub kind: CenterKind,
    /// Aggregate demand of assigned stores.
    pub demand: Demand,
    /// Required floor space, in square feet.
    pub sqft: Float,
}

/// Amount of stores within a distance range from their assigned centers.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceBucket {
    /// Range label.
    pub label: &'static str,
    /// Amount of stores.
    pub count: usize,
}

/// Returns demand and required floor space of every center.
pub fn get_center_summaries(problem: &Problem, solution: &Solution) -> Vec<CenterSummary> {
    solution
        .centers
        .iter()
        .zip(solution.center_kinds.iter())
        .zip(solution.center_demands.iter())
        .map(|((&coordinate, &kind), &demand)| {
            let (sqft_per_weight, _) = problem.costs.footprint(kind == CenterKind::Redistribution);
            CenterSummary { coordinate, kind, demand, sqft: demand * sqft_per_weight }
        })
        .collect()
}

/// Returns distribution of stores by great-circle distance to assigned center, using left-closed
/// ranges: `<100`, `100-250`, `250-500`, `500-1000`, `>1000` miles.
pub fn get_distance_distribution(solution: &Solution) -> Vec<DistanceBucket> {
    let mut counts = [0_usize; DISTANCE_BUCKET_BOUNDS.len()];

    solution.assignments.iter().for_each(|assignment| {
        if let Some(idx) = DISTANCE_BUCKET_BOUNDS.iter().position(|(bound, _)| assignment.distance < *bound) {
            counts[idx] += 1;
        }
    });

    DISTANCE_BUCKET_BOUNDS.iter().zip(counts).map(|(&(_, label), count)| DistanceBucket { label, count }).collect()
}
