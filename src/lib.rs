//! Pantrybook binary support: bootstrap (config, tracing, wiring) and the CLI.

pub mod bootstrap;
pub mod cli;
