//! A command line interface library for warehouse network optimizer.
//!
//! Provides reading of demand tables and scenario files, an OpenRouteService travel time client
//! and writers of optimization results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use netloc_core as core;

pub mod extensions;
