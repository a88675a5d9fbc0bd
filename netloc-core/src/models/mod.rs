//! A collection of models to represent a warehouse network problem and its solution.

pub mod common;
pub mod problem;
pub mod routing;

mod solution;
pub use self::solution::*;
