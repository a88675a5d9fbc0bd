use crate::algorithms::geometry::get_fallback_duration;
use crate::helpers::models::*;
use crate::prelude::*;

fn create_costs(inbound: Option<InboundParameters>) -> CostParameters {
    CostParameters {
        inbound,
        redistribution: RedistributionParameters { transfer_rate: 0.015, ..RedistributionParameters::default() },
        ..create_test_costs()
    }
}

#[test]
fn can_calculate_transfer_to_redistribution_only_centers() {
    let supply = Coordinate::new(-118.2, 34.);
    let rdcs = [Coordinate::new(-90., 38.6), Coordinate::new(-84.4, 33.7)];
    let problem = ProblemBuilder::default()
        .add_demand_points(create_square_stores())
        .add_redistribution_center(rdcs[0], RedistributionRole::RedistributeOnly)
        .add_redistribution_center(rdcs[1], RedistributionRole::RedistributeOnly)
        .add_supply_point(supply, 1.)
        .with_costs(create_costs(None))
        .build()
        .unwrap();
    let total_demand = problem.total_demand();

    let solution = Solver::new(problem, SolverConfig::new(vec![1]), test_environment()).solve().unwrap();

    let expected = rdcs
        .iter()
        .map(|rdc| get_fallback_duration(rdc, &supply) * (total_demand / 2.) * 1. * 0.015)
        .sum::<f64>();
    assert!(solution.costs.transfer > 0.);
    assert_float_eq(solution.costs.transfer, expected);
    assert_eq!(solution.costs.inbound, 0.);
    assert_eq!(solution.centers.len(), 1);
}

#[test]
fn can_serve_stores_from_redistribute_and_serve_center() {
    let stores = create_square_stores();
    let sdc = stores[0].coordinate;
    let supply = Coordinate::new(-118.2, 34.);
    let problem = ProblemBuilder::default()
        .add_demand_points(stores)
        .add_redistribution_center(sdc, RedistributionRole::RedistributeAndServe)
        .add_supply_point(supply, 0.5)
        .with_costs(create_costs(Some(InboundParameters { rate: 0.01 })))
        .build()
        .unwrap();

    let solution = Solver::new(problem, SolverConfig::new(vec![1, 2]), test_environment()).solve_all().unwrap();

    assert_eq!(solution[0].centers, vec![sdc]);
    assert_eq!(solution[0].center_kinds, vec![CenterKind::Redistribution]);
    assert_eq!(solution[0].costs.transfer, 0.);
    assert_float_eq(
        solution[0].costs.inbound,
        get_fallback_duration(&supply, &sdc) * 4. * DEFAULT_STORE_DEMAND * 0.5 * 0.01,
    );
    assert_eq!(solution[1].centers[0], sdc);
    assert_eq!(solution[1].center_kinds, vec![CenterKind::Redistribution, CenterKind::Candidate]);
}
