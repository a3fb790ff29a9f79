//! Tree-walking interpreter.
//!
//! `Interpreter` owns the mutable run state (frame stack, value arena, print
//! handler) and borrows the immutable program (`ExprArena`, `StringInterner`).
//! Every node evaluates to a [`Flow`]; a `return` surfaces as
//! `Flow::Return` and unwinds enclosing `if`s and suites by ordinary
//! return values until the call that owns the frame captures it.

mod builder;
mod call;
mod suite;

pub use builder::{CallResultBinding, InterpreterBuilder};

use tracing::debug;

use tpy_ir::{ExprArena, ExprId, ExprKind, Name, StringInterner};
use tpy_value::{
    local_variable_unbound, malformed_node, missing_operand_value, name_not_defined, EvalResult,
    Value, ValueArena, ValueId,
};

use crate::environment::{Environment, LookupError};
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::{evaluate_binary, evaluate_unary};

/// Outcome of evaluating one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Evaluation finished; statements and definitions produce no value.
    Normal(Option<ValueId>),
    /// A `return` ran; enclosing blocks stop until the call boundary.
    Return(ValueId),
}

impl Flow {
    /// The value carried by either variant.
    #[inline]
    pub fn value(self) -> Option<ValueId> {
        match self {
            Flow::Normal(value) => value,
            Flow::Return(value) => Some(value),
        }
    }
}

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Environment,
    values: ValueArena,
    print_handler: SharedPrintHandler,
    call_result_binding: CallResultBinding,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings (stdout, recursion limit 1000).
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Run a program from its root node.
    ///
    /// Returns the value the root produced, if any. Global state persists
    /// between runs on the same interpreter.
    #[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
    pub fn run(&mut self, root: ExprId) -> EvalResult<Option<Value>> {
        match self.eval(root) {
            Ok(flow) => Ok(flow.value().map(|id| self.values.get(id))),
            Err(err) => {
                debug!(error = %err, depth = self.env.depth(), "evaluation failed");
                // unwind any frames the failing call left behind
                while self.env.depth() > 0 {
                    self.env.pop_frame();
                }
                Err(err)
            }
        }
    }

    /// Evaluate one node.
    pub fn eval(&mut self, id: ExprId) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult<Flow> {
        match *self.arena.get(id) {
            ExprKind::Empty | ExprKind::ParamList(_) => Ok(Flow::Normal(None)),
            ExprKind::Ident(name) => self.eval_ident(name).map(|v| Flow::Normal(Some(v))),
            ExprKind::Int(n) => Ok(self.produce(Value::Int(n))),
            ExprKind::Float(bits) => Ok(self.produce(Value::Float(f64::from_bits(bits)))),
            ExprKind::None => Ok(Flow::Normal(Some(ValueId::NONE))),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_operand(operand, op.as_symbol())?;
                let result = evaluate_unary(value, op)?;
                Ok(self.produce(result))
            }
            ExprKind::Binary { op, left, right } => {
                let symbol = op.as_symbol();
                let left = self.eval_operand(left, symbol)?;
                let right = self.eval_operand(right, symbol)?;
                let result = evaluate_binary(left, right, op)?;
                Ok(self.produce(result))
            }
            ExprKind::Assign { target, value } => self.eval_assign(target, value),
            ExprKind::Print(expr) => self.eval_print(expr),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch),
            ExprKind::Suite(range) => self.eval_suite(range),
            ExprKind::FuncDef { name, params, body } => {
                self.env.bind_function(name, body);
                if self.arena.is_empty(params) {
                    self.env.clear_params(name);
                } else {
                    self.env.bind_params(name, params);
                }
                Ok(Flow::Normal(None))
            }
            ExprKind::Call { callee, args } => self.eval_call(callee, args),
            ExprKind::Return(expr) => {
                let value = if self.arena.is_empty(expr) {
                    ValueId::NONE
                } else {
                    self.eval(expr)?.value().unwrap_or(ValueId::NONE)
                };
                self.env.signal_return(value);
                Ok(Flow::Return(value))
            }
        }
    }

    fn produce(&mut self, value: Value) -> Flow {
        Flow::Normal(Some(self.values.alloc(value)))
    }

    fn eval_ident(&self, name: Name) -> EvalResult<ValueId> {
        self.env.resolve_value(name).map_err(|err| {
            let text = self.interner.lookup(name);
            match err {
                LookupError::NotDefined => name_not_defined(text),
                LookupError::Unbound => local_variable_unbound(text),
            }
        })
    }

    /// Evaluate an operator's operand down to a value.
    fn eval_operand(&mut self, id: ExprId, op: &'static str) -> EvalResult<Value> {
        if self.arena.is_empty(id) {
            return Err(malformed_node(format!("operand of '{op}' is empty")));
        }
        match self.eval(id)?.value() {
            Some(value) => Ok(self.values.get(value)),
            None => Err(missing_operand_value(op)),
        }
    }

    /// Evaluate a child that must produce a value; `what` names it in errors.
    fn eval_required(&mut self, id: ExprId, what: &str) -> EvalResult<ValueId> {
        if self.arena.is_empty(id) {
            return Err(malformed_node(format!("{what} is empty")));
        }
        self.eval(id)?
            .value()
            .ok_or_else(|| malformed_node(format!("{what} produced no value")))
    }

    fn eval_assign(&mut self, target: ExprId, value: ExprId) -> EvalResult<Flow> {
        let ExprKind::Ident(name) = *self.arena.get(target) else {
            return Err(malformed_node(format!(
                "cannot assign to {}",
                self.arena.get(target).kind_name()
            )));
        };
        let value = self.eval_required(value, "assigned value")?;
        self.env.bind_value(name, value);
        Ok(Flow::Normal(Some(value)))
    }

    fn eval_print(&mut self, expr: ExprId) -> EvalResult<Flow> {
        if self.arena.is_empty(expr) {
            self.print_handler.println("");
        } else {
            let value = self.eval_required(expr, "print argument")?;
            self.print_handler
                .println(&self.values.get(value).to_string());
        }
        Ok(Flow::Normal(None))
    }

    fn eval_if(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> EvalResult<Flow> {
        let cond = self.eval_required(cond, "if condition")?;
        if self.values.get(cond).is_truthy() {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }

    /// Read a value produced during this run.
    pub fn value(&self, id: ValueId) -> Value {
        self.values.get(id)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Current value bound to `name`, as seen from the top frame.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let name = self.interner.intern(name);
        self.env.resolve_value(name).ok().map(|id| self.values.get(id))
    }
}
