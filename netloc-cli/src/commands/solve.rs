#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use netloc_cli::core::prelude::*;
use netloc_cli::core::utils::Timer;
use netloc_cli::core::validation::{FormatError, validate_problem};
use netloc_cli::extensions::import::import_demand;
use netloc_cli::extensions::solve::config::{ScenarioConfig, read_config};
use netloc_cli::extensions::solve::report::*;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const DEMAND_ARG_NAME: &str = "DEMAND";
const CONFIG_ARG_NAME: &str = "config";
const SCENARIO_ARG_NAME: &str = "scenario";
const OUT_DIR_ARG_NAME: &str = "out-dir";
const LOG_ARG_NAME: &str = "log";
const PARALLEL_ARG_NAME: &str = "parallel";

const DEFAULT_SCENARIO_NAME: &str = "default";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Chooses number and placement of warehouses for every scenario")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies demand table format")
                .required(true)
                .value_parser(["csv"])
                .index(1),
        )
        .arg(
            Arg::new(DEMAND_ARG_NAME)
                .help("Sets the demand table file with Longitude, Latitude, DemandLbs columns")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to scenario file, default scenario is used if omitted")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SCENARIO_ARG_NAME)
                .help("Specifies name of a single scenario to solve")
                .short('s')
                .long(SCENARIO_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies directory for result files, summary is printed to stdout if omitted")
                .short('o')
                .long(OUT_DIR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress is logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Specifies whether candidate amounts of warehouses are evaluated in parallel")
                .long(PARALLEL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("no demand format")?;
    let demand_path = matches.get_one::<String>(DEMAND_ARG_NAME).ok_or("no demand table")?;
    let demand = import_demand(input_format, BufReader::new(open_file(demand_path, "demand")?))
        .map_err(|err| format!("cannot read demand: '{err}'"))?;

    let scenarios = get_scenarios(matches)?;
    let environment = create_environment(matches);
    let out_dir = matches.get_one::<String>(OUT_DIR_ARG_NAME).map(PathBuf::from);

    let reports = scenarios
        .iter()
        .map(|scenario| {
            let (problem, solution) = solve_scenario(scenario, demand.clone(), &environment)?;

            if let Some(out_dir) = out_dir.as_ref() {
                let path = out_dir.join(format!("{}_assignment.csv", scenario.name));
                write_assignment_csv(BufWriter::new(create_file(&path, "assignment")?), &problem, &solution)
                    .map_err(|err| err.to_string())?;
            }

            Ok(create_summary_report(&scenario.name, &problem, &solution))
        })
        .collect::<Result<Vec<_>, String>>()?;

    write_reports(out_dir, &reports, out_writer_func)
}

fn get_scenarios(matches: &ArgMatches) -> Result<Vec<ScenarioConfig>, String> {
    let scenarios = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => {
            read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string())?.scenarios
        }
        None => vec![ScenarioConfig::new_default(DEFAULT_SCENARIO_NAME)],
    };

    let scenarios = match matches.get_one::<String>(SCENARIO_ARG_NAME) {
        Some(name) => scenarios.into_iter().filter(|scenario| scenario.name == *name).collect::<Vec<_>>(),
        None => scenarios,
    };

    if scenarios.is_empty() { Err("no scenarios to solve".to_string()) } else { Ok(scenarios) }
}

fn create_environment(matches: &ArgMatches) -> Environment {
    let is_parallel = matches.get_flag(PARALLEL_ARG_NAME);

    if matches.get_flag(LOG_ARG_NAME) {
        Environment::new(Arc::new(|msg: &str| eprintln!("{msg}")), is_parallel)
    } else {
        Environment::new(Environment::new_silent().logger, is_parallel)
    }
}

fn solve_scenario(
    scenario: &ScenarioConfig,
    demand: Vec<DemandPoint>,
    environment: &Environment,
) -> Result<(Problem, Solution), String> {
    let problem = scenario.create_problem(demand).map_err(|err| format!("scenario '{}': {err}", scenario.name))?;
    let k_values = scenario.get_k_values();

    validate_problem(&problem, &k_values).map_err(|errors| {
        format!(
            "scenario '{}' has {} validation errors:\n{}",
            scenario.name,
            errors.len(),
            FormatError::format_many(&errors, "\n")
        )
    })?;

    (environment.logger)(&format!(
        "solving scenario '{}' with {} stores, amounts of warehouses: {:?}",
        scenario.name,
        problem.demand_points.len(),
        k_values
    ));

    let timer = Timer::start();
    let provider = scenario.create_travel_time_provider(environment.logger.clone());
    let solution = Solver::new(problem.clone(), SolverConfig::new(k_values), environment.clone())
        .with_travel_time_provider(provider)
        .solve()
        .map_err(|err| format!("scenario '{}': {err}", scenario.name))?;

    (environment.logger)(&format!(
        "scenario '{}' solved in {}ms: k={}, total cost {:.2}",
        scenario.name,
        timer.elapsed_millis(),
        solution.k,
        solution.costs.total
    ));

    Ok((problem, solution))
}

fn write_reports(
    out_dir: Option<PathBuf>,
    reports: &[SummaryReport],
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    match out_dir {
        Some(out_dir) => reports.iter().try_for_each(|report| {
            let path = out_dir.join(format!("{}_summary.json", report.scenario));
            let writer = out_writer_func(Some(create_file(&path, "summary")?));

            write_summary_json(writer, std::slice::from_ref(report)).map_err(|err| err.to_string())
        }),
        None => write_summary_json(out_writer_func(None), reports).map_err(|err| err.to_string()),
    }
}
