use crate::models::common::{Coordinate, DemandPoint};
use crate::models::problem::*;
use crate::utils::{Environment, Float, InfoLogger};
use std::sync::{Arc, Mutex};

pub const DEFAULT_STORE_DEMAND: Float = 10_000.;

/// Returns corners of a square with side about 200 miles in the middle of US.
pub fn create_square_coordinates() -> Vec<Coordinate> {
    vec![
        Coordinate::new(-100., 39.),
        Coordinate::new(-96.3, 39.),
        Coordinate::new(-96.3, 41.9),
        Coordinate::new(-100., 41.9),
    ]
}

pub fn create_square_stores() -> Vec<DemandPoint> {
    create_square_coordinates()
        .into_iter()
        .map(|coordinate| DemandPoint::new(coordinate, DEFAULT_STORE_DEMAND))
        .collect()
}

pub fn create_stores(data: &[(Float, Float, Float)]) -> Vec<DemandPoint> {
    data.iter().map(|&(lng, lat, demand)| DemandPoint::new(Coordinate::new(lng, lat), demand)).collect()
}

/// Returns two groups of stores located far from each other: around Chicago and around Dallas.
pub fn create_two_region_stores() -> Vec<DemandPoint> {
    create_stores(&[
        (-87.6, 41.9, 1000.),
        (-87.9, 42.1, 2000.),
        (-87.7, 41.7, 1500.),
        (-96.8, 32.8, 3000.),
        (-97.1, 32.7, 1000.),
        (-96.6, 33.0, 2500.),
    ])
}

pub fn create_test_costs() -> CostParameters {
    CostParameters {
        outbound_rate: 0.02,
        sqft_per_weight: 0.02,
        cost_per_sqft: 6.,
        fixed_cost: 250_000.,
        inbound: None,
        redistribution: RedistributionParameters::default(),
    }
}

pub fn create_test_problem(stores: Vec<DemandPoint>) -> Problem {
    ProblemBuilder::default().add_demand_points(stores).with_costs(create_test_costs()).build().unwrap()
}

pub fn test_environment() -> Environment {
    Environment::new_silent()
}

/// Returns a logger which keeps all messages and a shared reference to them.
pub fn create_capturing_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

pub fn assert_float_eq(actual: Float, expected: Float) {
    let tolerance = 1E-9 * expected.abs().max(1000.);
    assert!((actual - expected).abs() < tolerance, "expected {expected}, got {actual}");
}
