use crate::helpers::models::*;
use crate::prelude::*;

#[test]
fn can_select_globally_cheapest_amount_of_centers() {
    let k_values = vec![1, 2, 3, 4];
    let problem = create_test_problem(create_two_region_stores());
    let solver = Solver::new(problem, SolverConfig::new(k_values.clone()), test_environment());

    let best = solver.solve().unwrap();

    let totals = k_values.iter().map(|&k| solver.evaluate(k).unwrap().costs.total).collect::<Vec<_>>();
    let min_total = totals.iter().cloned().fold(f64::INFINITY, f64::min);
    assert_eq!(best.costs.total, min_total);
    assert_eq!(best.k, k_values[totals.iter().position(|&total| total == min_total).unwrap()]);
}

#[test]
fn can_prefer_fewer_centers_with_high_fixed_cost() {
    let problem = ProblemBuilder::default()
        .add_demand_points(create_two_region_stores())
        .with_costs(CostParameters { fixed_cost: 1E9, ..create_test_costs() })
        .build()
        .unwrap();

    let solution = Solver::new(problem, SolverConfig::new(vec![3, 2, 1]), test_environment()).solve().unwrap();

    assert_eq!(solution.k, 1);
}

#[test]
fn can_be_deterministic() {
    let solve = || {
        let problem = create_test_problem(create_two_region_stores());
        Solver::new(problem, SolverConfig::new(vec![1, 2, 3]), test_environment()).solve().unwrap()
    };

    let first = solve();
    let second = solve();

    assert_eq!(first.k, second.k);
    assert_eq!(first.centers, second.centers);
    assert_eq!(first.costs, second.costs);
}
