//! A collection of reusable algorithms without dependencies on routing models.

pub mod mdp;
