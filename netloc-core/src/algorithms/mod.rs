//! This module contains generic algorithms used by the solver.

pub mod clustering;
pub mod geometry;
