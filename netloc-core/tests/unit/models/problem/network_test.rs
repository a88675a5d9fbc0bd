use super::*;

fn create_topology() -> NetworkTopology {
    NetworkTopology {
        fixed_centers: vec![Coordinate::new(-90., 40.), Coordinate::new(-95., 35.)],
        redistribution_centers: vec![
            RedistributionCenter { coordinate: Coordinate::new(-85., 38.), role: RedistributionRole::RedistributeOnly },
            RedistributionCenter {
                coordinate: Coordinate::new(-80., 36.),
                role: RedistributionRole::RedistributeAndServe,
            },
            RedistributionCenter { coordinate: Coordinate::new(-82., 34.), role: RedistributionRole::RedistributeOnly },
        ],
        supply_points: vec![
            SupplyPoint { coordinate: Coordinate::new(-118., 34.), share: 0.6 },
            SupplyPoint { coordinate: Coordinate::new(-74., 40.), share: 0. },
        ],
    }
}

#[test]
fn can_get_pinned_centers_with_serving_redistribution_centers_last() {
    let topology = create_topology();

    assert_eq!(
        topology.pinned_centers(),
        vec![Coordinate::new(-90., 40.), Coordinate::new(-95., 35.), Coordinate::new(-80., 36.)]
    );
    assert_eq!(topology.serving_redistribution_slots(), 2..3);
}

#[test]
fn can_get_redistribution_only_centers() {
    let topology = create_topology();

    let centers = topology.redistribution_only_centers().collect::<Vec<_>>();

    assert_eq!(centers, vec![Coordinate::new(-85., 38.), Coordinate::new(-82., 34.)]);
}

#[test]
fn can_skip_inactive_supply_points() {
    let topology = create_topology();

    let active = topology.active_supply_points().map(|supply| supply.coordinate).collect::<Vec<_>>();

    assert_eq!(active, vec![Coordinate::new(-118., 34.)]);
}
