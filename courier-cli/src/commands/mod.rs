pub mod predict;
pub mod route;
pub mod sequence;
pub mod train;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches};
use courier_cli::extensions::read_adjacency;
use courier_cli::extensions::results::serialize_result;
use courier_core::models::{AdjacencyIndex, Metric};
use courier_core::utils::{InfoLogger, create_noop_logger, create_stderr_logger};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

const GRAPH_ARG_NAME: &str = "GRAPH";
const METRIC_ARG_NAME: &str = "metric";
const FROM_ARG_NAME: &str = "from";
const TO_ARG_NAME: &str = "to";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

/// Creates a writer for command output: the given file or stdout.
pub(crate) type OutWriterFn = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_required<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches.get_one::<String>(arg_name).map(String::as_str).ok_or_else(|| format!("'{arg_name}' argument is required"))
}

fn graph_arg() -> Arg {
    Arg::new(GRAPH_ARG_NAME).help("Sets a path to the road graph in json format").required(true).index(1)
}

fn metric_arg() -> Arg {
    Arg::new(METRIC_ARG_NAME)
        .help("Specifies a metric used as a road cost")
        .short('m')
        .long(METRIC_ARG_NAME)
        .required(false)
        .value_parser(PossibleValuesParser::new(Metric::all().iter().map(|metric| metric.key())))
        .default_value(Metric::default().key())
}

fn location_arg(arg_name: &'static str, help: &'static str, short: char) -> Arg {
    Arg::new(arg_name).help(help).short(short).long(arg_name).required(true)
}

fn out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to a file for result output, stdout is used if omitted")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

fn log_arg() -> Arg {
    Arg::new(LOG_ARG_NAME)
        .help("Specifies whether progress should be logged")
        .long(LOG_ARG_NAME)
        .action(ArgAction::SetTrue)
}

fn get_metric(matches: &ArgMatches) -> Result<Metric, String> {
    matches.get_one::<String>(METRIC_ARG_NAME).map_or(Ok(Metric::default()), |key| {
        Metric::from_str(key).map_err(|err| err.to_string())
    })
}

fn get_adjacency(matches: &ArgMatches) -> Result<Arc<AdjacencyIndex>, String> {
    let metric = get_metric(matches)?;
    let graph = open_file(get_required(matches, GRAPH_ARG_NAME)?, "graph")?;

    read_adjacency(BufReader::new(graph), metric)
}

/// Returns names of the start and the target locations checking that they are known.
fn get_endpoints<'a>(matches: &'a ArgMatches, adjacency: &AdjacencyIndex) -> Result<(&'a str, &'a str), String> {
    let from = get_required(matches, FROM_ARG_NAME)?;
    let to = get_required(matches, TO_ARG_NAME)?;

    adjacency.require_id(from).and_then(|_| adjacency.require_id(to)).map_err(|err| err.to_string())?;

    Ok((from, to))
}

fn get_logger(matches: &ArgMatches) -> InfoLogger {
    if matches.get_flag(LOG_ARG_NAME) { create_stderr_logger() } else { create_noop_logger() }
}

fn write_result<T: Serialize>(matches: &ArgMatches, out_writer_func: OutWriterFn, result: &T) -> Result<(), String> {
    let out_file = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| create_file(path, "out result"))
        .transpose()?;

    serialize_result(result, out_writer_func(out_file))
}
