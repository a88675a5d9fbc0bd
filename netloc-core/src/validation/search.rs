#[cfg(test)]
#[path = "../../tests/unit/validation/search_test.rs"]
mod search_test;

use super::*;
use crate::solver::count_distinct_points;

/// Checks that candidate amounts of centers are specified and positive.
fn check_e1200_invalid_k_values(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.k_values.is_empty() || ctx.k_values.contains(&0) {
        Err(FormatError::new(
            "E1200".to_string(),
            "invalid candidate amounts of warehouses".to_string(),
            "specify at least one positive amount of warehouses".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that every requested amount of centers can be produced from distinct locations.
fn check_e1201_degenerate_clustering(ctx: &ValidationContext) -> Result<(), FormatError> {
    let pinned = ctx.problem.topology.pinned_centers();
    let distinct = count_distinct_points(&ctx.problem.demand_points, &pinned);

    let degenerate = ctx
        .k_values
        .iter()
        .filter(|&&k| k.max(pinned.len()) > distinct)
        .map(|k| k.to_string())
        .collect::<Vec<_>>();

    if degenerate.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1201".to_string(),
            "amount of warehouses exceeds amount of distinct locations".to_string(),
            format!("use at most {distinct} warehouses"),
            format!("requested amounts: '{}'", degenerate.join(", ")),
        ))
    }
}

/// Validates search settings.
pub fn validate_search(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1200_invalid_k_values(ctx), check_e1201_degenerate_clustering(ctx)])
}
