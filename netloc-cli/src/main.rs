//! A command line interface to warehouse network optimizer.

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

fn main() {
    let matches = cli::get_app().get_matches();
    cli::run_subcommand(matches);
}

mod cli {
    use super::commands::solve::{get_solve_app, run_solve};
    use super::commands::{create_write_buffer, exit_with_error};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("Warehouse Network Optimizer")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to choose number and placement of warehouses")
            .subcommand(get_solve_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            exit_with_error(&err);
        }
    }
}
