use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_random;
use crate::models::{Graph, Metric};
use crate::routing::shortest_path;
use crate::utils::{GenericError, create_noop_logger};
use std::cell::RefCell;
use std::sync::Mutex;

#[derive(Default)]
struct InMemoryStore {
    table: RefCell<Option<NamedQTable>>,
}

impl QTableStore for InMemoryStore {
    fn save(&self, table: &NamedQTable) -> GenericResult<()> {
        *self.table.borrow_mut() = Some(table.clone());
        Ok(())
    }

    fn load(&self) -> GenericResult<NamedQTable> {
        self.table.borrow().clone().ok_or_else(|| GenericError::NotFound("no table saved".to_string()))
    }
}

fn create_policy(graph: &Graph, start: &str, target: &str) -> QLearningPolicy {
    let environment = RouteEnvironment::new(create_adjacency(graph, Metric::Distance), start, target).unwrap();

    QLearningPolicy::new(environment, LearningConfig::default(), create_test_random(), create_noop_logger()).unwrap()
}

parameterized_test! {can_learn_shortest_route, (graph, start, target, episodes), {
    let adjacency = create_adjacency(&graph, Metric::Distance);
    let mut policy = create_policy(&graph, start, target);

    let stats = policy.train(episodes);
    let route = policy.derive_route(start, target).unwrap();

    assert_eq!(stats.episodes(), episodes);
    assert_eq!(route, shortest_path(&adjacency, start, target));
}}

can_learn_shortest_route! {
    case01_cycle: (create_cycle_graph(), "A", "D", 1000),
    case02_triangle: (create_triangle_graph(), "X", "Z", 1000),
}

#[test]
fn can_derive_suboptimal_route_without_training() {
    let mut policy = create_policy(&create_triangle_graph(), "X", "Z");

    let route = policy.derive_route("X", "Z").unwrap();

    // all estimates are equal, so the first neighbour is always taken until the step limit
    assert_eq!(route.path, vec!["X", "Y", "X", "Y", "X", "Y", "X"]);
    assert_eq!(route.cost, 18.);
}

#[test]
fn can_handle_location_without_actions() {
    let mut policy = create_policy(&create_disconnected_graph(), "E", "A");

    assert_eq!(policy.select_action(4), None);

    let stats = policy.train(10);
    assert_eq!(stats.rewards, vec![0.; 10]);
    assert!(policy.table().is_empty());

    let route = policy.derive_route("E", "A").unwrap();
    assert_eq!(route, Route { cost: 0., path: vec!["E".to_string()] });
}

#[test]
fn can_select_only_valid_actions() {
    let mut policy = create_policy(&create_city_graph(), "Depot", "Harbor");
    policy.train(50);

    let adjacency = policy.environment().adjacency();
    (0..adjacency.size()).for_each(|state| {
        (0..20).for_each(|_| {
            let action = policy.select_action(state).unwrap();
            assert!(adjacency.cost_of(state, action).is_some());
        });
    });
}

#[test]
fn can_reject_unknown_route_endpoints() {
    let mut policy = create_policy(&create_triangle_graph(), "X", "Z");

    let result = policy.derive_route("X", "W");

    assert_eq!(result, Err(GenericError::Data("unknown location: 'W'".to_string())));
}

parameterized_test! {can_validate_learning_config, (alpha, gamma, epsilon, expected), {
    let environment =
        RouteEnvironment::new(create_adjacency(&create_triangle_graph(), Metric::Distance), "X", "Z").unwrap();
    let config = LearningConfig { alpha, gamma, epsilon };

    let result = QLearningPolicy::new(environment, config, create_test_random(), create_noop_logger());

    assert_eq!(result.err(), expected.map(|msg: &str| GenericError::Data(msg.to_string())));
}}

can_validate_learning_config! {
    case01_default: (0.3, 0.9, 0.2, None),
    case02_bounds: (1., 0., 1., None),
    case03_alpha: (1.5, 0.9, 0.2, Some("learning parameter 'alpha' must be in [0, 1] range, got: 1.5")),
    case04_gamma: (0.3, -0.1, 0.2, Some("learning parameter 'gamma' must be in [0, 1] range, got: -0.1")),
    case05_epsilon: (0.3, 0.9, Float::NAN, Some("learning parameter 'epsilon' must be in [0, 1] range, got: NaN")),
}

#[test]
fn can_keep_learned_route_after_save_and_load() {
    let store = InMemoryStore::default();
    let mut trained = create_policy(&create_triangle_graph(), "X", "Z");
    trained.train(1000);
    trained.save(&store).unwrap();

    let mut restored = create_policy(&create_triangle_graph(), "X", "Z");
    restored.load(&store).unwrap();

    assert_eq!(restored.table().len(), trained.table().len());
    assert_eq!(restored.derive_route("X", "Z").unwrap(), trained.derive_route("X", "Z").unwrap());
}

#[test]
fn can_propagate_error_when_nothing_is_saved() {
    let store = InMemoryStore::default();
    let mut policy = create_policy(&create_triangle_graph(), "X", "Z");

    let result = policy.load(&store);

    assert_eq!(result, Err(GenericError::NotFound("no table saved".to_string())));
}

#[test]
fn can_drop_entries_with_unknown_locations_on_set_table() {
    let mut policy = create_policy(&create_triangle_graph(), "X", "Z");
    let table = vec![
        ("X".to_string(), "Y".to_string(), -1.),
        ("Q".to_string(), "X".to_string(), -2.),
        ("Y".to_string(), "W".to_string(), -3.),
    ]
    .into_iter()
    .collect::<NamedQTable>();

    policy.set_table(&table);

    let table = policy.table();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&"X".to_string(), &"Y".to_string()), Some(-1.));
}

#[test]
fn can_report_training_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let environment =
        RouteEnvironment::new(create_adjacency(&create_cycle_graph(), Metric::Distance), "A", "C").unwrap();
    let mut policy =
        QLearningPolicy::new(environment, LearningConfig::default(), create_test_random(), logger).unwrap();

    policy.train(250);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("episode 100/250 | total reward: "));
    assert!(messages[1].starts_with("episode 200/250 | total reward: "));
    assert!(messages[2].starts_with("training of 250 episodes completed in "));
}

#[test]
fn can_disable_progress_messages() {
    let messages = Arc::new(Mutex::new(0_usize));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |_: &str| *messages.lock().unwrap() += 1)
    };
    let environment =
        RouteEnvironment::new(create_adjacency(&create_cycle_graph(), Metric::Distance), "A", "C").unwrap();
    let mut policy = QLearningPolicy::new(environment, LearningConfig::default(), create_test_random(), logger)
        .unwrap()
        .with_log_every(0);

    policy.train(300);

    assert_eq!(*messages.lock().unwrap(), 1);
}

#[test]
fn can_calculate_mean_reward_of_last_episodes() {
    let stats = TrainingStats { rewards: vec![-10., -8., -4., -2.] };

    assert_eq!(stats.mean_reward(2), Some(-3.));
    assert_eq!(stats.mean_reward(10), Some(-6.));
    assert_eq!(TrainingStats::default().mean_reward(5), None);
}
