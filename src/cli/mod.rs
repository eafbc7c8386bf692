//! Command-line workflow, decoupled from clap so it can be driven from tests.

pub mod orchestration;
