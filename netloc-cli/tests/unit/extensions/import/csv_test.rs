use super::*;
use netloc_core::prelude::Coordinate;
use std::io::BufReader;

#[test]
fn can_read_demand_with_extra_columns() {
    let demand_csv = r"Store,Longitude,Latitude,DemandLbs
A,-87.6298, 41.8781,1200.5
B,-96.797,32.7767,800
";

    let demand = read_csv_demand(BufReader::new(demand_csv.as_bytes())).unwrap();

    assert_eq!(demand.len(), 2);
    assert_eq!(demand[0].coordinate, Coordinate::new(-87.6298, 41.8781));
    assert_eq!(demand[0].demand, 1200.5);
    assert_eq!(demand[1].demand, 800.);
}

#[test]
fn can_read_empty_demand() {
    let demand = read_csv_demand(BufReader::new("Longitude,Latitude,DemandLbs\n".as_bytes())).unwrap();

    assert!(demand.is_empty());
}

#[test]
fn can_propagate_row_error() {
    let demand_csv = r"Longitude,Latitude,DemandLbs
-87.6,41.8,100
-96.7,abc,100
";

    let result = read_csv_demand(BufReader::new(demand_csv.as_bytes()));

    assert!(result.err().expect("should return error").to_string().starts_with("row 2:"));
}

#[test]
fn can_propagate_missing_column_error() {
    let demand_csv = r"Longitude,Latitude
-87.6,41.8
";

    assert!(read_csv_demand(BufReader::new(demand_csv.as_bytes())).is_err());
}
