//! tpy Eval - tree-walking evaluator for tpy programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: frame stack with stack-based name resolution
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `Interpreter`: walks an `ExprArena`, owning the frames and the value arena
//! - `PrintHandler`: where `print` output goes
//!
//! # Re-exports
//!
//! Value and error types from `tpy_value` are re-exported for convenience.

mod environment;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;

pub use tpy_value::{EvalError, EvalErrorKind, EvalResult, Value, ValueId};

pub use environment::{Environment, LookupError, Slot, DEFAULT_RECURSION_LIMIT};
pub use interpreter::{CallResultBinding, Flow, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
