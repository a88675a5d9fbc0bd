use super::*;

/// Checks that cost rates are finite and non-negative.
fn check_e1300_negative_cost_rate(ctx: &ValidationContext) -> Result<(), FormatError> {
    let costs = &ctx.problem.costs;

    let invalid = [
        ("outbound rate", Some(costs.outbound_rate)),
        ("square feet per weight", Some(costs.sqft_per_weight)),
        ("cost per square foot", Some(costs.cost_per_sqft)),
        ("fixed cost", Some(costs.fixed_cost)),
        ("inbound rate", costs.inbound.as_ref().map(|inbound| inbound.rate)),
        ("transfer rate", Some(costs.redistribution.transfer_rate)),
        ("redistribution square feet per weight", costs.redistribution.sqft_per_weight),
        ("redistribution cost per square foot", costs.redistribution.cost_per_sqft),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.filter(|value| !value.is_finite() || *value < 0.).map(|_| name))
    .collect::<Vec<_>>();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1300".to_string(),
            "invalid cost rate".to_string(),
            format!("use finite non-negative values for: '{}'", invalid.join(", ")),
        ))
    }
}

/// Validates cost parameters.
pub fn validate_costs(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1300_negative_cost_rate(ctx)])
}
