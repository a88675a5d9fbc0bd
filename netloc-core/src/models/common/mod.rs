//! Common models.

mod domain;
pub use self::domain::*;
