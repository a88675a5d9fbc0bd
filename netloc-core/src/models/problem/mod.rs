//! Problem domain models.

mod builders;
pub use self::builders::ProblemBuilder;

mod costs;
pub use self::costs::*;

mod network;
pub use self::network::*;

use crate::models::common::{Demand, DemandPoint};

/// Defines a warehouse network problem: stores to serve, network topology and cost rates.
/// Problem is immutable once built.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Stores with their annual demand, in the order of the input table.
    pub demand_points: Vec<DemandPoint>,

    /// Fixed, redistribution centers and supply points.
    pub topology: NetworkTopology,

    /// Cost rates.
    pub costs: CostParameters,
}

impl Problem {
    /// Returns total demand of all stores.
    pub fn total_demand(&self) -> Demand {
        self.demand_points.iter().map(|point| point.demand).sum()
    }
}
