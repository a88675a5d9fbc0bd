//! The solver module contains the search over candidate warehouse counts.
//!
//! For every requested count `k` the solver:
//!
//! - generates `max(k, pinned)` candidate centers, where pinned centers are the caller's fixed
//!   centers followed by redistribute-and-serve centers
//! - assigns every store to its closest center by travel time
//! - evaluates the cost model
//!
//! Every requested count is evaluated, there is no pruning. The solution with strictly the lowest
//! total cost wins, ties are resolved in favor of the count evaluated first.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod assignment;
pub use self::assignment::*;

mod centers;
pub use self::centers::*;

mod costs;
pub use self::costs::*;

pub mod report;

use crate::algorithms::clustering::KMeansSettings;
use crate::models::common::Cost;
use crate::models::problem::Problem;
use crate::models::routing::TravelTimeProvider;
use crate::models::{CenterKind, Solution};
use crate::utils::{Environment, GenericError, GenericResult, Timer, compare_floats, parallel_collect};
use std::sync::Arc;

/// Specifies search settings.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Candidate amounts of centers, evaluated in the given order. Fixed centers and
    /// redistribute-and-serve centers occupy the first slots, so a configuration has
    /// `max(k, fixed + redistribute-and-serve)` serving centers.
    pub k_values: Vec<usize>,
    /// Clustering settings used by default center generator.
    pub clustering: KMeansSettings,
}

impl SolverConfig {
    /// Creates a new instance of `SolverConfig` with default clustering settings.
    pub fn new(k_values: Vec<usize>) -> Self {
        Self { k_values, clustering: KMeansSettings::default() }
    }

    /// Creates a new instance of `SolverConfig` for inclusive range of candidate amounts.
    pub fn new_with_range(min: usize, max: usize) -> Self {
        Self::new((min..=max).collect())
    }

    /// Sets clustering settings.
    pub fn with_clustering(mut self, clustering: KMeansSettings) -> Self {
        self.clustering = clustering;
        self
    }
}

/// Solves warehouse network problem by comparing configurations with different amount of centers.
pub struct Solver {
    problem: Arc<Problem>,
    config: SolverConfig,
    environment: Environment,
    provider: TravelTimeProvider,
    generator: Arc<dyn CenterGenerator>,
}

impl Solver {
    /// Creates a new instance of `Solver` which uses distance based travel time estimation and
    /// k-means center generation.
    pub fn new(problem: Problem, config: SolverConfig, environment: Environment) -> Self {
        let provider = TravelTimeProvider::new_fallback(environment.logger.clone());
        let generator = Arc::new(KMeansCenterGenerator::new(config.clustering.clone()));

        Self { problem: Arc::new(problem), config, environment, provider, generator }
    }

    /// Sets travel time provider.
    pub fn with_travel_time_provider(mut self, provider: TravelTimeProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Sets center generator.
    pub fn with_center_generator(mut self, generator: Arc<dyn CenterGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Returns the cheapest solution across all requested amounts of centers.
    pub fn solve(&self) -> GenericResult<Solution> {
        let best = select_best(self.solve_all()?).ok_or_else(|| GenericError::from("no candidate center amounts"))?;

        (self.environment.logger)(&format!(
            "best configuration: k={}, {} centers, total cost {:.2}",
            best.k,
            best.centers.len(),
            best.costs.total
        ));

        Ok(best)
    }

    /// Returns solutions for every requested amount of centers, in requested order.
    pub fn solve_all(&self) -> GenericResult<Vec<Solution>> {
        let k_values = &self.config.k_values;
        if k_values.is_empty() {
            return Err("no candidate center amounts".into());
        }

        let transfer = CostModel::new(&self.problem, &self.provider).transfer();

        if self.environment.is_parallel {
            parallel_collect(k_values, |&k| self.evaluate_with_transfer(k, transfer)).into_iter().collect()
        } else {
            k_values.iter().map(|&k| self.evaluate_with_transfer(k, transfer)).collect()
        }
    }

    /// Evaluates configuration with given amount of centers.
    pub fn evaluate(&self, k: usize) -> GenericResult<Solution> {
        let transfer = CostModel::new(&self.problem, &self.provider).transfer();

        self.evaluate_with_transfer(k, transfer)
    }

    fn evaluate_with_transfer(&self, k: usize, transfer: Cost) -> GenericResult<Solution> {
        let problem = self.problem.as_ref();
        let logger = &self.environment.logger;

        Timer::measure_duration_with_callback(
            || -> GenericResult<Solution> {
                let pinned = problem.topology.pinned_centers();
                let centers = self.generator.generate(&problem.demand_points, &pinned, k)?;
                let center_kinds = get_center_kinds(problem, centers.len());

                let assignments = assign_to_centers(&problem.demand_points, &centers, &self.provider);
                let center_demands = get_center_demands(&problem.demand_points, &assignments, centers.len());

                let costs = CostModel::new(problem, &self.provider).evaluate(
                    &centers,
                    &center_kinds,
                    &assignments,
                    &center_demands,
                    transfer,
                );

                Ok(Solution { k, centers, center_kinds, assignments, center_demands, costs })
            },
            |duration| {
                (logger)(&format!("k={k} evaluated in {}ms", duration.as_millis()));
            },
        )
        .inspect(|solution: &Solution| {
            let costs = &solution.costs;
            (logger)(&format!(
                "k={k}: total {:.2} (outbound {:.2}, warehousing {:.2}, inbound {:.2}, transfer {:.2})",
                costs.total, costs.outbound, costs.warehousing, costs.inbound, costs.transfer
            ));
        })
    }
}

/// Solves the problem with default clustering settings and distance based travel times.
pub fn optimize(problem: Problem, k_values: Vec<usize>, environment: Environment) -> GenericResult<Solution> {
    Solver::new(problem, SolverConfig::new(k_values), environment).solve()
}

/// Selects the solution with strictly the lowest total cost, the first one wins on ties.
pub fn select_best(solutions: impl IntoIterator<Item = Solution>) -> Option<Solution> {
    solutions.into_iter().fold(None, |best, candidate| match best {
        Some(best) if compare_floats(candidate.costs.total, best.costs.total).is_ge() => Some(best),
        _ => Some(candidate),
    })
}

fn get_center_kinds(problem: &Problem, size: usize) -> Vec<CenterKind> {
    let fixed = problem.topology.fixed_centers.len();
    let redistribution = problem.topology.serving_redistribution_slots();

    (0..size)
        .map(|idx| match idx {
            idx if idx < fixed => CenterKind::Fixed,
            idx if redistribution.contains(&idx) => CenterKind::Redistribution,
            _ => CenterKind::Candidate,
        })
        .collect()
}
