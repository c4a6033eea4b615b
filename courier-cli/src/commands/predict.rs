#[cfg(test)]
#[path = "../../tests/unit/commands/predict_test.rs"]
mod predict_test;

use super::*;
use clap::Command;
use courier_cli::extensions::results::{PolicyResult, RouteResult};
use courier_core::learning::{LearningConfig, QLearningPolicy, RouteEnvironment};
use courier_core::routing::shortest_path;
use courier_core::utils::DefaultRandom;
use courier_format::table::JsonQTableStore;

const TABLE_ARG_NAME: &str = "table";

pub fn get_predict_app() -> Command {
    Command::new("predict")
        .about("Derives a route from a previously trained policy table")
        .arg(graph_arg())
        .arg(location_arg(FROM_ARG_NAME, "Sets a start location", 'f'))
        .arg(location_arg(TO_ARG_NAME, "Sets a target location", 't'))
        .arg(
            Arg::new(TABLE_ARG_NAME)
                .help("Specifies path to a trained policy table")
                .long(TABLE_ARG_NAME)
                .required(true),
        )
        .arg(metric_arg())
        .arg(out_result_arg())
        .arg(log_arg())
}

pub fn run_predict(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let adjacency = get_adjacency(matches)?;
    let (from, to) = get_endpoints(matches, adjacency.as_ref())?;
    let store = JsonQTableStore::new(get_required(matches, TABLE_ARG_NAME)?);

    // route derivation is greedy, so learning parameters and randomness are not used
    let environment = RouteEnvironment::new(adjacency.clone(), from, to).map_err(|err| err.to_string())?;
    let mut policy = QLearningPolicy::new(
        environment,
        LearningConfig::default(),
        Arc::new(DefaultRandom::default()),
        get_logger(matches),
    )
    .map_err(|err| err.to_string())?;

    policy.load(&store).map_err(|err| format!("cannot load policy table: {err}"))?;
    let route = policy.derive_route(from, to).map_err(|err| err.to_string())?;
    let metric = adjacency.metric();

    write_result(
        matches,
        out_writer_func,
        &PolicyResult {
            route: RouteResult::new(metric, &route),
            shortest: RouteResult::new(metric, &shortest_path(adjacency.as_ref(), from, to)),
        },
    )
}
