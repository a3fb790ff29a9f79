//! tpy host: loads program trees from JSON and runs them.
//!
//! The binary (`tpy`) is a thin argument parser over [`commands`]; the
//! library half exists so integration tests can drive the same code paths.

pub mod commands;
pub mod program;
mod tracing_setup;

pub use program::{LoadError, Node, Program};
pub use tracing_setup::init_tracing;
