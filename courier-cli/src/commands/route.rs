#[cfg(test)]
#[path = "../../tests/unit/commands/route_test.rs"]
mod route_test;

use super::*;
use clap::Command;
use courier_cli::extensions::results::RouteResult;
use courier_core::routing::shortest_path;

pub fn get_route_app() -> Command {
    Command::new("route")
        .about("Finds the cheapest route between two locations")
        .arg(graph_arg())
        .arg(location_arg(FROM_ARG_NAME, "Sets a start location", 'f'))
        .arg(location_arg(TO_ARG_NAME, "Sets a target location", 't'))
        .arg(metric_arg())
        .arg(out_result_arg())
}

pub fn run_route(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let adjacency = get_adjacency(matches)?;
    let (from, to) = get_endpoints(matches, adjacency.as_ref())?;

    let route = shortest_path(adjacency.as_ref(), from, to);

    write_result(matches, out_writer_func, &RouteResult::new(adjacency.metric(), &route))
}
