//! Module provides various helper functionality.

pub mod import;
pub mod routing;
pub mod solve;
