use super::*;
use crate::helpers::models::{create_square_stores, create_test_problem};
use crate::models::common::Coordinate;
use crate::models::problem::{ProblemBuilder, RedistributionRole};

parameterized_test! {can_validate_k_values, (k_values, expected), {
    can_validate_k_values_impl(k_values, expected);
}}

can_validate_k_values! {
    case_01_valid: (vec![1, 2, 4], vec![]),
    case_02_empty: (vec![], vec!["E1200"]),
    case_03_zero: (vec![0, 1], vec!["E1200"]),
    case_04_too_many: (vec![2, 5], vec!["E1201"]),
    case_05_zero_and_too_many: (vec![0, 6], vec!["E1200", "E1201"]),
}

fn can_validate_k_values_impl(k_values: Vec<usize>, expected: Vec<&str>) {
    let problem = create_test_problem(create_square_stores());

    let codes = validate_search(&ValidationContext::new(&problem, &k_values))
        .err()
        .unwrap_or_default()
        .into_iter()
        .map(|err| err.code)
        .collect::<Vec<_>>();

    assert_eq!(codes, expected);
}

#[test]
fn can_count_pinned_centers_as_distinct_locations() {
    let problem = ProblemBuilder::default()
        .add_demand_points(create_square_stores())
        .add_fixed_center(Coordinate::new(-90., 35.))
        .add_redistribution_center(Coordinate::new(-85., 36.), RedistributionRole::RedistributeAndServe)
        .build()
        .unwrap();

    assert!(validate_search(&ValidationContext::new(&problem, &[6])).is_ok());

    let errors = validate_search(&ValidationContext::new(&problem, &[7])).err().unwrap();
    assert_eq!(errors[0].code, "E1201");
    assert_eq!(errors[0].details, Some("requested amounts: '7'".to_string()));
}

#[test]
fn can_validate_whole_problem() {
    let problem = create_test_problem(create_square_stores());

    assert!(validate_problem(&problem, &[1, 2, 3, 4]).is_ok());

    let errors = validate_problem(&problem, &[]).err().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(FormatError::format_many(&errors, "\n"), format!("{}", errors[0]));
    assert!(errors[0].to_string().starts_with("E1200, cause: "));
}
