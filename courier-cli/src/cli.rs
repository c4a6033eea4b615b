#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use crate::commands::create_write_buffer;
use crate::commands::predict::{get_predict_app, run_predict};
use crate::commands::route::{get_route_app, run_route};
use crate::commands::sequence::{get_sequence_app, run_sequence};
use crate::commands::train::{get_train_app, run_train};
use clap::{ArgMatches, Command};
use std::process;

pub fn get_app() -> Command {
    Command::new("courier")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("A command line interface to plan delivery routes over a city road graph")
        .subcommand(get_route_app())
        .subcommand(get_sequence_app())
        .subcommand(get_train_app())
        .subcommand(get_predict_app())
}

pub fn run_subcommand(arg_matches: ArgMatches) {
    let result = match arg_matches.subcommand() {
        Some(("route", route_matches)) => run_route(route_matches, create_write_buffer),
        Some(("sequence", sequence_matches)) => run_sequence(sequence_matches, create_write_buffer),
        Some(("train", train_matches)) => run_train(train_matches, create_write_buffer),
        Some(("predict", predict_matches)) => run_predict(predict_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
