//! A library part of the `courier` command line interface: configuration and result formats shared
//! by its commands.

#![warn(missing_docs)]

pub mod extensions;
