#[cfg(test)]
#[path = "../../tests/unit/validation/demand_test.rs"]
mod demand_test;

use super::*;
use crate::models::common::Coordinate;

/// Checks that demand table is not empty.
fn check_e1000_empty_demand(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.demand_points.is_empty() {
        Err(FormatError::new(
            "E1000".to_string(),
            "empty demand table".to_string(),
            "specify at least one store".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that demand weights are finite and non-negative.
fn check_e1001_invalid_demand(ctx: &ValidationContext) -> Result<(), FormatError> {
    let rows = ctx
        .problem
        .demand_points
        .iter()
        .enumerate()
        .filter(|(_, point)| !point.demand.is_finite() || point.demand < 0.)
        .map(|(idx, _)| (idx + 1).to_string())
        .collect::<Vec<_>>();

    if rows.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "invalid demand weight".to_string(),
            format!("use finite non-negative demand in rows: '{}'", rows.join(", ")),
        ))
    }
}

/// Checks that store coordinates are within valid range.
fn check_e1002_invalid_store_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let rows = ctx
        .problem
        .demand_points
        .iter()
        .enumerate()
        .filter(|(_, point)| !is_valid_coordinate(&point.coordinate))
        .map(|(idx, _)| (idx + 1).to_string())
        .collect::<Vec<_>>();

    if rows.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "invalid coordinate".to_string(),
            format!("check longitude and latitude of stores in rows: '{}'", rows.join(", ")),
        ))
    }
}

/// Checks that coordinate is finite and within WGS84 degree range.
pub(crate) fn is_valid_coordinate(coordinate: &Coordinate) -> bool {
    coordinate.lng.is_finite()
        && coordinate.lat.is_finite()
        && (-180. ..=180.).contains(&coordinate.lng)
        && (-90. ..=90.).contains(&coordinate.lat)
}

/// Validates demand table.
pub fn validate_demand(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_empty_demand(ctx),
        check_e1001_invalid_demand(ctx),
        check_e1002_invalid_store_coordinates(ctx),
    ])
}
