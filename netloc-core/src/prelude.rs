//! This module reimports commonly used types.

pub use crate::models::common::{Coordinate, DemandPoint};
pub use crate::models::problem::{
    CostParameters, InboundParameters, NetworkTopology, Problem, ProblemBuilder, RedistributionCenter,
    RedistributionParameters, RedistributionRole, SupplyPoint,
};
pub use crate::models::routing::{RoutingService, TravelTimeProvider};
pub use crate::models::{Assignment, CenterKind, CostBreakdown, Solution};

pub use crate::solver::{Solver, SolverConfig};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
