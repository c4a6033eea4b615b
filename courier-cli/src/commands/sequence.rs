#[cfg(test)]
#[path = "../../tests/unit/commands/sequence_test.rs"]
mod sequence_test;

use super::*;
use clap::Command;
use courier_cli::extensions::results::SequenceResult;
use courier_core::routing::RouteSequencer;

const STOPS_ARG_NAME: &str = "stops";
const START_ARG_NAME: &str = "start";
const END_ARG_NAME: &str = "end";

/// Min amount of stops which makes sequencing meaningful.
const MIN_STOPS: usize = 2;

pub fn get_sequence_app() -> Command {
    Command::new("sequence")
        .about("Finds the cheapest order to visit delivery stops")
        .arg(graph_arg())
        .arg(
            Arg::new(STOPS_ARG_NAME)
                .help("Sets comma separated delivery stops")
                .short('s')
                .long(STOPS_ARG_NAME)
                .required(true)
                .num_args(1..)
                .value_delimiter(','),
        )
        .arg(
            Arg::new(START_ARG_NAME)
                .help("Sets a start location, the first stop is used if omitted")
                .long(START_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(END_ARG_NAME)
                .help("Sets an end location, the route returns to the start if omitted")
                .long(END_ARG_NAME)
                .required(false),
        )
        .arg(metric_arg())
        .arg(out_result_arg())
        .arg(log_arg())
}

pub fn run_sequence(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let stops = matches
        .get_many::<String>(STOPS_ARG_NAME)
        .map(|stops| stops.map(String::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    if stops.len() < MIN_STOPS {
        return Err(format!("please specify at least {MIN_STOPS} stops, got: {}", stops.len()));
    }

    let start = matches.get_one::<String>(START_ARG_NAME).map(String::as_str);
    let end = matches.get_one::<String>(END_ARG_NAME).map(String::as_str);

    let adjacency = get_adjacency(matches)?;
    let sequencer = RouteSequencer::new(adjacency.clone(), get_logger(matches));

    let route = sequencer.optimal_sequence(stops.as_slice(), start, end).map_err(|err| err.to_string())?;

    write_result(matches, out_writer_func, &SequenceResult::new(adjacency.metric(), &route))
}
