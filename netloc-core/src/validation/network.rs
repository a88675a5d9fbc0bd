#[cfg(test)]
#[path = "../../tests/unit/validation/network_test.rs"]
mod network_test;

use super::demand::is_valid_coordinate;
use super::*;

/// Checks that centers and supply points have valid coordinates.
fn check_e1002_invalid_network_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    let topology = &ctx.problem.topology;

    let invalid = topology
        .fixed_centers
        .iter()
        .map(|coordinate| ("fixed center", coordinate))
        .chain(topology.redistribution_centers.iter().map(|center| ("redistribution center", &center.coordinate)))
        .chain(topology.supply_points.iter().map(|supply| ("supply point", &supply.coordinate)))
        .filter(|(_, coordinate)| !is_valid_coordinate(coordinate))
        .map(|(name, coordinate)| format!("{name} ({coordinate})"))
        .collect::<Vec<_>>();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "invalid coordinate".to_string(),
            format!("check longitude and latitude of: '{}'", invalid.join(", ")),
        ))
    }
}

/// Checks that inbound flow has at least one active supply point.
fn check_e1100_no_active_supply_point(ctx: &ValidationContext) -> Result<(), FormatError> {
    let problem = ctx.problem;

    if problem.costs.inbound.is_some() && problem.topology.active_supply_points().next().is_none() {
        Err(FormatError::new(
            "E1100".to_string(),
            "inbound flow is enabled without active supply point".to_string(),
            "enable at least one supply point or disable inbound flow".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that supply point shares are within [0, 1], zero share marks inactive point.
fn check_e1101_invalid_supply_share(ctx: &ValidationContext) -> Result<(), FormatError> {
    let shares = ctx
        .problem
        .topology
        .supply_points
        .iter()
        .filter(|supply| !supply.share.is_finite() || !(0. ..=1.).contains(&supply.share))
        .map(|supply| supply.share.to_string())
        .collect::<Vec<_>>();

    if shares.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1101".to_string(),
            "invalid supply point share".to_string(),
            format!("use a fraction of inbound volume in [0, 1] instead of: '{}'", shares.join(", ")),
        ))
    }
}

/// Validates network topology.
pub fn validate_network(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1002_invalid_network_coordinates(ctx),
        check_e1100_no_active_supply_point(ctx),
        check_e1101_invalid_supply_share(ctx),
    ])
}
