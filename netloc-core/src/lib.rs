//! Core crate contains building blocks to solve a single-shot warehouse ***facility location problem***:
//! given stores with known annual shipment weight, choose number and placement of warehouses which
//! minimizes total network cost.
//!
//! The search runs in the following steps for every requested warehouse count:
//!
//! - candidate centers are generated by k-means clustering over store coordinates, with pinned
//!   slots for fixed centers (see [`solver::KMeansCenterGenerator`])
//! - stores are assigned to the center with minimal travel time (see [`solver::assign_to_centers`])
//! - outbound, warehousing, inbound and transfer costs are evaluated (see [`solver::CostModel`])
//!
//! The cheapest configuration across all counts is returned as [`models::Solution`].
//!
//! Travel times are provided by [`models::routing::TravelTimeProvider`] which prefers an external
//! routing service and falls back to great-circle distance driven at a constant speed.
//!
//! # Examples
//!
//! ```
//! use netloc_core::prelude::*;
//!
//! let stores = vec![
//!     DemandPoint::new(Coordinate::new(-100., 40.), 1000.),
//!     DemandPoint::new(Coordinate::new(-96., 40.), 1000.),
//!     DemandPoint::new(Coordinate::new(-96., 43.), 1000.),
//! ];
//! let problem = ProblemBuilder::default().add_demand_points(stores).build()?;
//! let config = SolverConfig::new(vec![1, 2]);
//!
//! let solution = Solver::new(problem, config, Environment::default()).solve()?;
//!
//! assert_eq!(solution.assignments.len(), 3);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
pub mod validation;
