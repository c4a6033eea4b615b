//! A command line interface to plan delivery routes over a city road graph.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod cli;
mod commands;

use crate::cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}
