use crate::models::common::Cost;
use crate::utils::Float;

/// Specifies cost rates used to evaluate a network configuration.
#[derive(Clone, Debug)]
pub struct CostParameters {
    /// Outbound delivery cost per weight unit per minute of travel.
    pub outbound_rate: Cost,
    /// Warehouse footprint per weight unit, in square feet.
    pub sqft_per_weight: Float,
    /// Annual variable cost per square foot.
    pub cost_per_sqft: Cost,
    /// Annual fixed cost per warehouse.
    pub fixed_cost: Cost,
    /// Inbound replenishment parameters, `None` when inbound flow is not considered.
    pub inbound: Option<InboundParameters>,
    /// Redistribution center specific parameters.
    pub redistribution: RedistributionParameters,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            outbound_rate: 0.02,
            sqft_per_weight: 0.02,
            cost_per_sqft: 6.,
            fixed_cost: 250_000.,
            inbound: None,
            redistribution: RedistributionParameters::default(),
        }
    }
}

/// Specifies inbound replenishment cost.
#[derive(Clone, Debug)]
pub struct InboundParameters {
    /// Inbound cost per weight unit per minute of travel.
    pub rate: Cost,
}

/// Specifies redistribution center transfer and occupancy cost.
#[derive(Clone, Debug, Default)]
pub struct RedistributionParameters {
    /// Transfer cost per weight unit per minute of travel between supply point and redistribution center.
    pub transfer_rate: Cost,
    /// Footprint per weight unit of redistribution center, falls back to warehouse value.
    pub sqft_per_weight: Option<Float>,
    /// Annual variable cost per square foot of redistribution center, falls back to warehouse value.
    pub cost_per_sqft: Option<Cost>,
}

impl CostParameters {
    /// Returns footprint per weight unit and cost per square foot for a center.
    pub fn footprint(&self, is_redistribution: bool) -> (Float, Cost) {
        if is_redistribution {
            (
                self.redistribution.sqft_per_weight.unwrap_or(self.sqft_per_weight),
                self.redistribution.cost_per_sqft.unwrap_or(self.cost_per_sqft),
            )
        } else {
            (self.sqft_per_weight, self.cost_per_sqft)
        }
    }
}
