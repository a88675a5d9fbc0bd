//! Provides a way to build the problem using the builder pattern.

use super::*;
use crate::models::common::Coordinate;
use crate::utils::{Float, GenericError, GenericResult};

/// Provides a way to build a [Problem] using the builder pattern.
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    demand_points: Vec<DemandPoint>,
    topology: NetworkTopology,
    costs: Option<CostParameters>,
}

impl ProblemBuilder {
    /// Adds stores.
    pub fn add_demand_points(mut self, points: impl IntoIterator<Item = DemandPoint>) -> Self {
        self.demand_points.extend(points);
        self
    }

    /// Adds a center which must be present in every solution.
    pub fn add_fixed_center(mut self, coordinate: Coordinate) -> Self {
        self.topology.fixed_centers.push(coordinate);
        self
    }

    /// Adds a redistribution center.
    pub fn add_redistribution_center(mut self, coordinate: Coordinate, role: RedistributionRole) -> Self {
        self.topology.redistribution_centers.push(RedistributionCenter { coordinate, role });
        self
    }

    /// Adds a supply point with its share of inbound volume.
    pub fn add_supply_point(mut self, coordinate: Coordinate, share: Float) -> Self {
        self.topology.supply_points.push(SupplyPoint { coordinate, share });
        self
    }

    /// Sets cost parameters, defaults are used if not called.
    pub fn with_costs(mut self, costs: CostParameters) -> Self {
        self.costs = Some(costs);
        self
    }

    /// Builds a [Problem].
    pub fn build(self) -> GenericResult<Problem> {
        if self.demand_points.is_empty() {
            return Err(GenericError::from("cannot build problem without demand points"));
        }

        Ok(Problem {
            demand_points: self.demand_points,
            topology: self.topology,
            costs: self.costs.unwrap_or_default(),
        })
    }
}
