//! This module reimports commonly used types.

pub use crate::models::{AdjacencyIndex, Edge, Graph, Location, LocationId, Metric};

pub use crate::routing::{MAX_SEQUENCE_STOPS, Route, RouteSequencer, SequencedRoute, route_cost, shortest_path};

pub use crate::learning::{
    LearningConfig, NamedQTable, QLearningPolicy, QTableStore, RouteEnvironment, StepInfo, StepResult, TrainingStats,
};

pub use crate::utils::{
    DefaultRandom, Float, GenericError, GenericResult, InfoLogger, Random, compare_floats, create_noop_logger,
    create_stderr_logger, create_writer_logger,
};
