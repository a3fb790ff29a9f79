//! Command handlers for the `tpy` CLI.
//!
//! Each submodule implements one command. Handlers that end the process
//! (`run_file`) sit on top of handlers that return results (`run_program`),
//! so tests can exercise everything short of `process::exit`.

mod run;

pub use run::{parse_run_options, run_file, run_program, RunOptions, SUCCESS_MESSAGE};
