#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use clap::Command;
use courier_cli::extensions::config::{TrainConfig, read_config};
use courier_cli::extensions::results::{PolicyResult, RouteResult, TrainResult};
use courier_core::learning::{DEFAULT_LOG_EVERY, QLearningPolicy, RouteEnvironment};
use courier_core::routing::shortest_path;
use courier_core::utils::{DefaultRandom, Random};
use courier_format::table::JsonQTableStore;

const EPISODES_ARG_NAME: &str = "episodes";
const ALPHA_ARG_NAME: &str = "alpha";
const GAMMA_ARG_NAME: &str = "gamma";
const EPSILON_ARG_NAME: &str = "epsilon";
const SEED_ARG_NAME: &str = "seed";
const CONFIG_ARG_NAME: &str = "config";
const OUT_TABLE_ARG_NAME: &str = "out-table";

const DEFAULT_EPISODES: usize = 1000;
const DEFAULT_TABLE_PATH: &str = "models/q_table.json";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains a q-learning routing policy and saves its table")
        .arg(graph_arg())
        .arg(location_arg(FROM_ARG_NAME, "Sets a start location of training episodes", 'f'))
        .arg(location_arg(TO_ARG_NAME, "Sets a target location of training episodes", 't'))
        .arg(metric_arg())
        .arg(
            Arg::new(EPISODES_ARG_NAME)
                .help("Specifies amount of training episodes")
                .short('e')
                .long(EPISODES_ARG_NAME)
                .required(false),
        )
        .arg(Arg::new(ALPHA_ARG_NAME).help("Specifies a learning rate").long(ALPHA_ARG_NAME).required(false))
        .arg(Arg::new(GAMMA_ARG_NAME).help("Specifies a discount factor").long(GAMMA_ARG_NAME).required(false))
        .arg(Arg::new(EPSILON_ARG_NAME).help("Specifies an exploration rate").long(EPSILON_ARG_NAME).required(false))
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a random seed to make training repeatable")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a training config in json format, arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_TABLE_ARG_NAME)
                .help("Specifies path to a file to save the trained table")
                .long(OUT_TABLE_ARG_NAME)
                .required(false)
                .default_value(DEFAULT_TABLE_PATH),
        )
        .arg(out_result_arg())
        .arg(log_arg())
}

pub fn run_train(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let config = get_config(matches)?;
    let episodes = config.episodes.unwrap_or(DEFAULT_EPISODES);
    let table_path = get_required(matches, OUT_TABLE_ARG_NAME)?;

    let adjacency = get_adjacency(matches)?;
    let (from, to) = get_endpoints(matches, adjacency.as_ref())?;

    let random: Arc<dyn Random> = match config.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let environment = RouteEnvironment::new(adjacency.clone(), from, to).map_err(|err| err.to_string())?;
    let mut policy = QLearningPolicy::new(environment, config.learning_config(), random, get_logger(matches))
        .map_err(|err| err.to_string())?
        .with_log_every(config.log_every.unwrap_or(DEFAULT_LOG_EVERY));

    let stats = policy.train(episodes);
    policy.save(&JsonQTableStore::new(table_path)).map_err(|err| format!("cannot save policy table: {err}"))?;

    let route = policy.derive_route(from, to).map_err(|err| err.to_string())?;
    let metric = adjacency.metric();

    write_result(
        matches,
        out_writer_func,
        &TrainResult {
            episodes: stats.episodes(),
            mean_reward: stats.mean_reward(DEFAULT_LOG_EVERY),
            table_size: policy.table().len(),
            table_path: table_path.to_string(),
            policy: PolicyResult {
                route: RouteResult::new(metric, &route),
                shortest: RouteResult::new(metric, &shortest_path(adjacency.as_ref(), from, to)),
            },
        },
    )
}

/// Reads config file, if specified, and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches) -> Result<TrainConfig, String> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let args_config = TrainConfig {
        alpha: parse_float_value(matches, ALPHA_ARG_NAME, "learning rate")?,
        gamma: parse_float_value(matches, GAMMA_ARG_NAME, "discount factor")?,
        epsilon: parse_float_value(matches, EPSILON_ARG_NAME, "exploration rate")?,
        episodes: parse_int_value(matches, EPISODES_ARG_NAME, "amount of episodes")?,
        seed: parse_int_value(matches, SEED_ARG_NAME, "random seed")?,
        log_every: None,
    };

    Ok(file_config.merge(args_config))
}
