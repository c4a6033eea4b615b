use super::*;
use std::fs::File;

#[test]
fn can_read_config_from_file() {
    let file = File::open("tests/data/train.config.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    assert_eq!(config.alpha, Some(0.5));
    assert_eq!(config.gamma, Some(0.8));
    assert_eq!(config.epsilon, None);
    assert_eq!(config.episodes, Some(200));
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.log_every, Some(50));
}

#[test]
fn can_use_defaults_for_missing_learning_parameters() {
    let config = read_config(BufReader::new(r#"{ "gamma": 0.5 }"#.as_bytes())).unwrap();

    assert_eq!(config.learning_config(), LearningConfig { alpha: 0.3, gamma: 0.5, epsilon: 0.2 });
    assert_eq!(TrainConfig::default().learning_config(), LearningConfig::default());
}

#[test]
fn can_override_values_on_merge() {
    let base = TrainConfig { alpha: Some(0.1), episodes: Some(10), seed: Some(1), ..TrainConfig::default() };
    let overrides = TrainConfig { alpha: Some(0.2), epsilon: Some(0.3), ..TrainConfig::default() };

    let config = base.merge(overrides);

    assert_eq!(
        config,
        TrainConfig {
            alpha: Some(0.2),
            gamma: None,
            epsilon: Some(0.3),
            episodes: Some(10),
            seed: Some(1),
            log_every: None
        }
    );
}

#[test]
fn can_report_malformed_config() {
    let result = read_config(BufReader::new(r#"{ "alpha": "high" }"#.as_bytes()));

    assert!(result.unwrap_err().starts_with("cannot deserialize config"));
}
