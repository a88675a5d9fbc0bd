use crate::cli::{get_app, run_subcommand};
use std::fs::File;
use std::io::BufReader;

const STORES_PATH: &str = "tests/data/stores.csv";
const SCENARIOS_PATH: &str = "tests/data/scenarios.json";

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap()
}

#[test]
fn can_solve_all_scenarios_into_out_dir() {
    let out_dir = tempfile::tempdir().unwrap();
    let args = vec![
        "netloc-cli",
        "solve",
        "csv",
        STORES_PATH,
        "--config",
        SCENARIOS_PATH,
        "--out-dir",
        out_dir.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let baseline = read_json(&out_dir.path().join("baseline_summary.json"));
    assert_eq!(baseline["scenario"], "baseline");
    assert!(baseline["costs"]["total"].as_f64().unwrap() > 0.);
    assert_eq!(baseline["costs"]["inbound"], 0.);
    assert_eq!(baseline["costs"]["transfer"], 0.);
    let stores = baseline["distanceDistribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|bucket| bucket["stores"].as_u64().unwrap())
        .sum::<u64>();
    assert_eq!(stores, 8);

    let network = read_json(&out_dir.path().join("network_summary.json"));
    assert_eq!(network["k"], 2);
    assert_eq!(network["centers"][0]["kind"], "fixed");
    assert_eq!(network["centers"][0]["longitude"], -87.6298);
    assert!(network["costs"]["inbound"].as_f64().unwrap() > 0.);
    assert!(network["costs"]["transfer"].as_f64().unwrap() > 0.);

    let assignment = std::fs::read_to_string(out_dir.path().join("network_assignment.csv")).unwrap();
    let lines = assignment.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Longitude,Latitude,DemandLbs,Warehouse,TimeMin,DistMiles");
    assert!(lines[1].starts_with("-87.6298,41.8781,12000.0,0,0.0,0.0"));
}

#[test]
fn can_solve_in_parallel_with_same_result() {
    let solve = |is_parallel: bool| {
        let out_dir = tempfile::tempdir().unwrap();
        let mut args = vec![
            "netloc-cli",
            "solve",
            "csv",
            STORES_PATH,
            "-c",
            SCENARIOS_PATH,
            "-s",
            "baseline",
            "-o",
            out_dir.path().to_str().unwrap(),
        ];
        if is_parallel {
            args.push("--parallel");
        }

        run_subcommand(get_app().try_get_matches_from(args).unwrap());

        read_json(&out_dir.path().join("baseline_summary.json"))
    };

    assert_eq!(solve(false), solve(true));
}
