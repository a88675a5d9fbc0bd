use super::*;
use crate::helpers::models::{create_square_stores, create_test_costs};
use crate::models::problem::{CostParameters, ProblemBuilder, RedistributionParameters};
use crate::models::{Assignment, CostBreakdown};

fn create_solution(distances: &[Distance]) -> Solution {
    Solution {
        k: 1,
        centers: vec![Coordinate::new(-98., 40.)],
        center_kinds: vec![CenterKind::Candidate],
        assignments: distances.iter().map(|&distance| Assignment { center: 0, duration: 0., distance }).collect(),
        center_demands: vec![0.],
        costs: CostBreakdown::default(),
    }
}

parameterized_test! {can_get_distance_distribution, (distances, expected), {
    can_get_distance_distribution_impl(distances, expected);
}}

can_get_distance_distribution! {
    case_01_empty: (vec![], [0, 0, 0, 0, 0]),
    case_02_lower_edges: (vec![0., 100., 250., 500., 1000.], [1, 1, 1, 1, 1]),
    case_03_upper_edges: (vec![99.99, 249.99, 499.99, 999.99], [1, 1, 1, 1, 0]),
    case_04_mixed: (vec![10., 20., 300., 2500.], [2, 0, 1, 0, 1]),
}

fn can_get_distance_distribution_impl(distances: Vec<Distance>, expected: [usize; 5]) {
    let solution = create_solution(&distances);

    let buckets = get_distance_distribution(&solution);

    assert_eq!(buckets.iter().map(|bucket| bucket.label).collect::<Vec<_>>(), vec![
        "<100", "100-250", "250-500", "500-1000", ">1000"
    ]);
    assert_eq!(buckets.iter().map(|bucket| bucket.count).collect::<Vec<_>>(), expected.to_vec());
}

#[test]
fn can_get_center_summaries_with_footprint_per_kind() {
    let costs = CostParameters {
        redistribution: RedistributionParameters {
            transfer_rate: 0.,
            sqft_per_weight: Some(0.05),
            cost_per_sqft: None,
        },
        ..create_test_costs()
    };
    let problem =
        ProblemBuilder::default().add_demand_points(create_square_stores()).with_costs(costs).build().unwrap();
    let solution = Solution {
        k: 3,
        centers: vec![Coordinate::new(-100., 39.), Coordinate::new(-96.3, 41.9), Coordinate::new(-98., 40.)],
        center_kinds: vec![CenterKind::Fixed, CenterKind::Redistribution, CenterKind::Candidate],
        assignments: vec![],
        center_demands: vec![1000., 2000., 0.],
        costs: CostBreakdown::default(),
    };

    let summaries = get_center_summaries(&problem, &solution);

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].kind, CenterKind::Fixed);
    assert!((summaries[0].sqft - 20.).abs() < 1E-9);
    assert_eq!(summaries[1].kind, CenterKind::Redistribution);
    assert!((summaries[1].sqft - 100.).abs() < 1E-9);
    assert_eq!(summaries[2].demand, 0.);
    assert_eq!(summaries[2].sqft, 0.);
}
