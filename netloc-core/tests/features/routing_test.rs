use crate::helpers::models::*;
use crate::helpers::routing::TestRoutingService;
use crate::prelude::*;
use std::sync::Arc;

fn solve_with_provider(provider: Option<TravelTimeProvider>) -> Solution {
    let problem = create_test_problem(create_two_region_stores());
    let solver = Solver::new(problem, SolverConfig::new(vec![2]), test_environment());
    let solver = match provider {
        Some(provider) => solver.with_travel_time_provider(provider),
        None => solver,
    };

    solver.solve().unwrap()
}

#[test]
fn can_fall_back_to_distance_when_routing_fails() {
    let (logger, messages) = create_capturing_logger();
    let service = Arc::new(TestRoutingService::new_failing("quota exceeded"));
    let provider = TravelTimeProvider::new(service.clone(), Some("key".to_string()), logger);

    let routed = solve_with_provider(Some(provider));
    let fallback = solve_with_provider(None);

    assert!(service.calls() > 0);
    assert_eq!(routed.assignments, fallback.assignments);
    assert_eq!(routed.costs, fallback.costs);
    assert!(messages.lock().unwrap().iter().any(|msg| msg.contains("quota exceeded")));
}

#[test]
fn can_skip_routing_service_without_credential() {
    let service = Arc::new(TestRoutingService::new_constant(60.));
    let provider = TravelTimeProvider::new(service.clone(), None, test_environment().logger);

    let solution = solve_with_provider(Some(provider));

    assert_eq!(service.calls(), 0);
    assert_eq!(solution.costs, solve_with_provider(None).costs);
}

#[test]
fn can_use_routed_travel_times() {
    let service = Arc::new(TestRoutingService::new_constant(60.));
    let provider = TravelTimeProvider::new(service, Some("key".to_string()), test_environment().logger);

    let solution = solve_with_provider(Some(provider));

    assert!(solution.assignments.iter().all(|assignment| assignment.duration == 1.));
    // 1 min * 11000 lbs * 0.02
    assert_float_eq(solution.costs.outbound, 220.);
}
