#[cfg(test)]
#[path = "../../tests/unit/solver/costs_test.rs"]
mod costs_test;

use crate::models::common::{Coordinate, Cost, Demand};
use crate::models::problem::Problem;
use crate::models::routing::TravelTimeProvider;
use crate::models::{Assignment, CenterKind, CostBreakdown};

/// Evaluates annual network cost components of a configuration.
pub struct CostModel<'a> {
    problem: &'a Problem,
    provider: &'a TravelTimeProvider,
}

impl<'a> CostModel<'a> {
    /// Creates a new instance of `CostModel`.
    pub fn new(problem: &'a Problem, provider: &'a TravelTimeProvider) -> Self {
        Self { problem, provider }
    }

    /// Evaluates all cost components. Transfer cost does not depend on configuration, so it is
    /// passed precalculated (see [`CostModel::transfer`]).
    pub fn evaluate(
        &self,
        centers: &[Coordinate],
        center_kinds: &[CenterKind],
        assignments: &[Assignment],
        center_demands: &[Demand],
        transfer: Cost,
    ) -> CostBreakdown {
        CostBreakdown::new(
            self.outbound(assignments),
            self.warehousing(center_kinds, center_demands),
            self.inbound(centers, center_demands),
            transfer,
        )
    }

    /// Returns delivery cost: travel time multiplied by store demand and outbound rate.
    pub fn outbound(&self, assignments: &[Assignment]) -> Cost {
        let rate = self.problem.costs.outbound_rate;

        self.problem
            .demand_points
            .iter()
            .zip(assignments.iter())
            .map(|(point, assignment)| assignment.duration * point.demand * rate)
            .sum()
    }

    /// Returns occupancy cost: fixed cost plus demand dependent footprint cost of every center.
    /// Redistribute-and-serve centers use their own footprint ratios.
    pub fn warehousing(&self, center_kinds: &[CenterKind], center_demands: &[Demand]) -> Cost {
        let costs = &self.problem.costs;

        center_kinds
            .iter()
            .zip(center_demands.iter())
            .map(|(kind, demand)| {
                let (sqft_per_weight, cost_per_sqft) = costs.footprint(*kind == CenterKind::Redistribution);
                costs.fixed_cost + demand * sqft_per_weight * cost_per_sqft
            })
            .sum()
    }

    /// Returns replenishment cost from every active supply point to every serving center, weighted
    /// by center demand and supply point share. Zero when inbound flow is not considered.
    pub fn inbound(&self, centers: &[Coordinate], center_demands: &[Demand]) -> Cost {
        let Some(inbound) = self.problem.costs.inbound.as_ref() else {
            return 0.;
        };

        self.problem
            .topology
            .active_supply_points()
            .map(|supply| {
                let durations = self.provider.get_durations(std::slice::from_ref(&supply.coordinate), centers);

                durations
                    .first()
                    .map(|row| {
                        row.iter()
                            .zip(center_demands.iter())
                            .map(|(duration, demand)| duration * demand * supply.share * inbound.rate)
                            .sum::<Cost>()
                    })
                    .unwrap_or(0.)
            })
            .sum()
    }

    /// Returns transfer cost to redistribute-only centers: total demand is split evenly between
    /// them regardless of store assignment, every center is replenished from every active supply
    /// point proportionally to its share.
    pub fn transfer(&self) -> Cost {
        let topology = &self.problem.topology;

        let redistribution_centers = topology.redistribution_only_centers().collect::<Vec<_>>();
        let supply_points = topology.active_supply_points().collect::<Vec<_>>();

        if redistribution_centers.is_empty() || supply_points.is_empty() {
            return 0.;
        }

        let equal_share = self.problem.total_demand() / redistribution_centers.len() as Demand;
        let rate = self.problem.costs.redistribution.transfer_rate;
        let supply_coordinates = supply_points.iter().map(|supply| supply.coordinate).collect::<Vec<_>>();

        self.provider
            .get_durations(&redistribution_centers, &supply_coordinates)
            .iter()
            .flat_map(|row| row.iter().zip(supply_points.iter()))
            .map(|(duration, supply)| duration * equal_share * supply.share * rate)
            .sum()
    }
}
