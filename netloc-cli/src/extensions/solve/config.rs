//! Scenario configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use crate::extensions::routing::{OrsRoutingService, resolve_api_key};
use netloc_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

const DEFAULT_MIN_WAREHOUSES: usize = 2;
const DEFAULT_MAX_WAREHOUSES: usize = 5;
const DEFAULT_INBOUND_RATE: f64 = 0.01;
const DEFAULT_TRANSFER_RATE: f64 = 0.015;

/// A scenario file content.
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Scenarios which are solved independently.
    pub scenarios: Vec<ScenarioConfig>,
}

/// A single what-if scenario.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// A scenario name, used as output file prefix.
    pub name: String,
    /// Cost rates.
    pub costs: Option<CostsConfig>,
    /// Candidate amounts of warehouses.
    pub warehouses: Option<WarehousesConfig>,
    /// Warehouses which must be present in every configuration.
    pub fixed_centers: Option<Vec<LocationConfig>>,
    /// Inbound flow settings.
    pub inbound: Option<InboundConfig>,
    /// Redistribution centers and their costs.
    pub redistribution: Option<RedistributionConfig>,
    /// Routing service settings.
    pub routing: Option<RoutingConfig>,
}

/// Cost rates, defaults are used for missing values.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostsConfig {
    /// Outbound cost per lb per minute.
    pub outbound_rate: Option<f64>,
    /// Warehouse footprint per lb.
    pub sqft_per_lb: Option<f64>,
    /// Annual cost per square foot.
    pub cost_per_sqft: Option<f64>,
    /// Annual fixed cost per warehouse.
    pub fixed_cost: Option<f64>,
}

/// Candidate amounts of warehouses.
#[derive(Clone, Deserialize, Debug)]
#[serde(untagged)]
pub enum WarehousesConfig {
    /// An inclusive range.
    Range {
        /// Minimum amount.
        min: usize,
        /// Maximum amount.
        max: usize,
    },
    /// A single amount.
    Count {
        /// An amount of warehouses.
        count: usize,
    },
    /// An explicit list, evaluated in given order.
    List {
        /// Amounts of warehouses.
        values: Vec<usize>,
    },
}

/// A location which can be switched off without removing it from the file.
#[derive(Clone, Deserialize, Debug)]
pub struct LocationConfig {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
    /// Whether location is used, default is true.
    pub enabled: Option<bool>,
}

/// Inbound flow settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InboundConfig {
    /// Whether inbound cost is considered, default is true.
    pub enabled: Option<bool>,
    /// Inbound cost per lb per minute.
    pub rate: Option<f64>,
    /// Supply points.
    pub supply_points: Vec<SupplyPointConfig>,
}

/// A supply point.
#[derive(Clone, Deserialize, Debug)]
pub struct SupplyPointConfig {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
    /// A fraction of inbound volume, zero share marks inactive point.
    pub share: f64,
    /// Whether supply point is used, default is true.
    pub enabled: Option<bool>,
}

/// Redistribution settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RedistributionConfig {
    /// Redistribution centers.
    pub centers: Vec<RedistributionCenterConfig>,
    /// Transfer cost per lb per minute.
    pub transfer_rate: Option<f64>,
    /// Redistribution center footprint per lb, warehouse value is used if missing.
    pub sqft_per_lb: Option<f64>,
    /// Redistribution center annual cost per square foot, warehouse value is used if missing.
    pub cost_per_sqft: Option<f64>,
}

/// A redistribution center.
#[derive(Clone, Deserialize, Debug)]
pub struct RedistributionCenterConfig {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
    /// Center role.
    pub role: RedistributionRoleConfig,
    /// Whether center is used, default is true.
    pub enabled: Option<bool>,
}

/// A redistribution center role.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RedistributionRoleConfig {
    /// Redistribute only.
    Rdc,
    /// Redistribute and serve stores.
    Sdc,
}

/// Routing service settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Whether routing service is used, default is true.
    pub enabled: Option<bool>,
    /// An api key, `ORS_API_KEY` environment variable is used if missing.
    pub api_key: Option<String>,
}

impl ScenarioConfig {
    /// Creates a scenario which uses default settings.
    pub fn new_default(name: &str) -> Self {
        Self {
            name: name.to_string(),
            costs: None,
            warehouses: None,
            fixed_centers: None,
            inbound: None,
            redistribution: None,
            routing: None,
        }
    }

    /// Returns candidate amounts of warehouses.
    pub fn get_k_values(&self) -> Vec<usize> {
        match &self.warehouses {
            Some(WarehousesConfig::Range { min, max }) => (*min..=*max).collect(),
            Some(WarehousesConfig::Count { count }) => vec![*count],
            Some(WarehousesConfig::List { values }) => values.clone(),
            None => (DEFAULT_MIN_WAREHOUSES..=DEFAULT_MAX_WAREHOUSES).collect(),
        }
    }

    /// Creates a problem definition from demand table and scenario settings.
    pub fn create_problem(&self, demand_points: Vec<DemandPoint>) -> GenericResult<Problem> {
        let builder = ProblemBuilder::default().add_demand_points(demand_points).with_costs(self.get_costs());

        let builder = self
            .fixed_centers
            .iter()
            .flatten()
            .filter(|location| is_enabled(location.enabled))
            .fold(builder, |builder, location| builder.add_fixed_center(Coordinate::new(location.lng, location.lat)));

        let builder = self
            .redistribution
            .iter()
            .flat_map(|redistribution| redistribution.centers.iter())
            .filter(|center| is_enabled(center.enabled))
            .fold(builder, |builder, center| {
                let role = match center.role {
                    RedistributionRoleConfig::Rdc => RedistributionRole::RedistributeOnly,
                    RedistributionRoleConfig::Sdc => RedistributionRole::RedistributeAndServe,
                };
                builder.add_redistribution_center(Coordinate::new(center.lng, center.lat), role)
            });

        let builder = self
            .inbound
            .iter()
            .filter(|inbound| is_enabled(inbound.enabled))
            .flat_map(|inbound| inbound.supply_points.iter())
            .filter(|supply| is_enabled(supply.enabled))
            .fold(builder, |builder, supply| {
                builder.add_supply_point(Coordinate::new(supply.lng, supply.lat), supply.share)
            });

        builder.build()
    }

    /// Creates travel time provider: routing service is used only when it is enabled.
    pub fn create_travel_time_provider(&self, logger: InfoLogger) -> TravelTimeProvider {
        match self.routing.as_ref().filter(|routing| is_enabled(routing.enabled)) {
            Some(routing) => TravelTimeProvider::new(
                Arc::new(OrsRoutingService::default()),
                resolve_api_key(routing.api_key.as_deref()),
                logger,
            ),
            None => TravelTimeProvider::new_fallback(logger),
        }
    }

    fn get_costs(&self) -> CostParameters {
        let defaults = CostParameters::default();
        let costs = self.costs.clone().unwrap_or_default();

        CostParameters {
            outbound_rate: costs.outbound_rate.unwrap_or(defaults.outbound_rate),
            sqft_per_weight: costs.sqft_per_lb.unwrap_or(defaults.sqft_per_weight),
            cost_per_sqft: costs.cost_per_sqft.unwrap_or(defaults.cost_per_sqft),
            fixed_cost: costs.fixed_cost.unwrap_or(defaults.fixed_cost),
            inbound: self
                .inbound
                .as_ref()
                .filter(|inbound| is_enabled(inbound.enabled))
                .map(|inbound| InboundParameters { rate: inbound.rate.unwrap_or(DEFAULT_INBOUND_RATE) }),
            redistribution: self
                .redistribution
                .as_ref()
                .map(|redistribution| RedistributionParameters {
                    transfer_rate: redistribution.transfer_rate.unwrap_or(DEFAULT_TRANSFER_RATE),
                    sqft_per_weight: redistribution.sqft_per_lb,
                    cost_per_sqft: redistribution.cost_per_sqft,
                })
                .unwrap_or_default(),
        }
    }
}

fn is_enabled(flag: Option<bool>) -> bool {
    flag.unwrap_or(true)
}

/// Reads scenario file.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
