//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use tpy_ir::{ExprArena, StringInterner};
use tpy_value::ValueArena;

use super::Interpreter;
use crate::environment::{Environment, DEFAULT_RECURSION_LIMIT};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Whether a call also binds its result under the function's own name in
/// the caller's frame.
///
/// Enabled by default so programs that read `f` after calling `f()` keep
/// working.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CallResultBinding {
    #[default]
    Enabled,
    Disabled,
}

/// Builder for creating Interpreter instances with various configurations.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    recursion_limit: usize,
    print_handler: Option<SharedPrintHandler>,
    call_result_binding: CallResultBinding,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            print_handler: None,
            call_result_binding: CallResultBinding::default(),
        }
    }

    /// Maximum number of nested call frames.
    #[must_use]
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Set where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn call_result_binding(mut self, binding: CallResultBinding) -> Self {
        self.call_result_binding = binding;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: Environment::new(self.recursion_limit),
            values: ValueArena::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_result_binding: self.call_result_binding,
        }
    }
}
