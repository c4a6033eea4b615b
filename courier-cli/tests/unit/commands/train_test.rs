use super::*;
use crate::helpers::*;
use courier_core::learning::QTableStore;
use std::path::PathBuf;

fn get_train_matches(params: &[&str]) -> ArgMatches {
    let args = [&["train", CAMPUS_GRAPH_PATH], params].concat();

    get_train_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_train_policy_and_save_table() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("models").join("q_table.json");
    let out_path = dir.path().join("train.json");
    let matches = get_train_matches(&[
        "-f",
        "Library",
        "-t",
        "Stadium",
        "--metric",
        "time",
        "--episodes",
        "300",
        "--seed",
        "42",
        "--out-table",
        table_path.to_str().unwrap(),
        "--out-result",
        out_path.to_str().unwrap(),
    ]);

    run_train(&matches, create_write_buffer).unwrap();

    let result: TrainResult = read_result(out_path.as_path());
    assert_eq!(result.episodes, 300);
    assert!(result.mean_reward.is_some());
    assert!(result.table_size > 0);
    assert_eq!(PathBuf::from(&result.table_path), table_path);
    assert_eq!(result.policy.route.metric, "time");
    assert_eq!(result.policy.route.path.first().map(String::as_str), Some("Library"));
    assert_eq!(result.policy.shortest.path, vec!["Library", "Hostel", "Stadium"]);
    assert_cost(result.policy.shortest.cost, 2.03);

    let table = JsonQTableStore::new(table_path).load().unwrap();
    assert_eq!(table.len(), result.table_size);
}

#[test]
fn can_predict_the_same_route_as_trained_one() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("q_table.json");
    let train_out_path = dir.path().join("train.json");
    let predict_out_path = dir.path().join("predict.json");
    let table_arg = table_path.to_str().unwrap();

    let matches = get_train_matches(&[
        "-f",
        "Canteen",
        "-t",
        "Stadium",
        "--seed",
        "1",
        "--episodes",
        "500",
        "--out-table",
        table_arg,
        "--out-result",
        train_out_path.to_str().unwrap(),
    ]);
    run_train(&matches, create_write_buffer).unwrap();

    let args = vec![
        "predict",
        CAMPUS_GRAPH_PATH,
        "-f",
        "Canteen",
        "-t",
        "Stadium",
        "--table",
        table_arg,
        "--out-result",
        predict_out_path.to_str().unwrap(),
    ];
    let matches = crate::commands::predict::get_predict_app().try_get_matches_from(args).unwrap();
    crate::commands::predict::run_predict(&matches, create_write_buffer).unwrap();

    let trained: TrainResult = read_result(train_out_path.as_path());
    let predicted: PolicyResult = read_result(predict_out_path.as_path());
    assert_eq!(predicted, trained.policy);
}

#[test]
fn can_merge_config_file_with_arguments() {
    let matches = get_train_matches(&["-f", "Library", "-t", "Gate", "--config", TRAIN_CONFIG_PATH, "--gamma", "0.7"]);

    let config = get_config(&matches).unwrap();

    assert_eq!(
        config,
        TrainConfig {
            alpha: Some(0.5),
            gamma: Some(0.7),
            epsilon: None,
            episodes: Some(200),
            seed: Some(7),
            log_every: Some(50),
        }
    );
}

parameterized_test! {can_reject_invalid_parameters, (params, expected_error), {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("q_table.json");
    let params: &[&str] = params;
    let args = [&["-f", "Library", "-t", "Gate", "--out-table", table_path.to_str().unwrap()][..], params].concat();
    let matches = get_train_matches(args.as_slice());

    let result = run_train(&matches, create_write_buffer);

    assert!(result.unwrap_err().contains(expected_error));
    assert!(!table_path.exists());
}}

can_reject_invalid_parameters! {
    case01_alpha_range: (&["--alpha", "1.5"], "learning parameter 'alpha' must be in [0, 1] range, got: 1.5"),
    case02_alpha_value: (&["--alpha", "fast"], "cannot get float value"),
    case03_episodes_value: (&["--episodes", "many"], "cannot get integer value"),
    case04_missing_config: (&["--config", "tests/data/missing.json"], "cannot open config file"),
}
