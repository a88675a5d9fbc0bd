#[cfg(test)]
#[path = "../../tests/unit/solver/assignment_test.rs"]
mod assignment_test;

use crate::algorithms::geometry::get_distance;
use crate::models::Assignment;
use crate::models::common::{Coordinate, Demand, DemandPoint};
use crate::models::routing::TravelTimeProvider;
use crate::utils::stable_argmin;

/// Assigns every store to the center with minimal travel time, ties are resolved in favor of
/// the lowest center index. Only serve-eligible centers should be passed.
pub fn assign_to_centers(
    demand_points: &[DemandPoint],
    centers: &[Coordinate],
    provider: &TravelTimeProvider,
) -> Vec<Assignment> {
    let origins = demand_points.iter().map(|point| point.coordinate).collect::<Vec<_>>();
    let matrix = provider.get_durations(&origins, centers);

    demand_points
        .iter()
        .zip(matrix)
        .map(|(point, durations)| {
            let (center, duration) = stable_argmin(durations).unwrap_or((0, 0.));
            let distance = centers.get(center).map_or(0., |center| get_distance(&point.coordinate, center));

            Assignment { center, duration, distance }
        })
        .collect()
}

/// Returns aggregate demand of every center.
pub fn get_center_demands(demand_points: &[DemandPoint], assignments: &[Assignment], centers: usize) -> Vec<Demand> {
    demand_points.iter().zip(assignments.iter()).fold(vec![0.; centers], |mut demands, (point, assignment)| {
        demands[assignment.center] += point.demand;
        demands
    })
}
