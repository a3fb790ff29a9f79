//! Function calls.

use tracing::trace;

use tpy_ir::{ExprId, ExprKind, Name};
use tpy_value::{arity_mismatch, malformed_node, name_not_defined, EvalResult, ValueId};

use super::{CallResultBinding, Flow, Interpreter};

impl Interpreter<'_> {
    /// Call `callee` with the argument list at `args`.
    ///
    /// A function declared with parameters gets its arguments evaluated in
    /// the caller's frame, before the callee's frame exists, and checked
    /// against the declared count. A function without a parameter list
    /// ignores its arguments. The return value is captured before the frame
    /// is popped; a body that never returns yields `None`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = self.interner.lookup(callee), depth = self.env.depth())
    )]
    pub(super) fn eval_call(&mut self, callee: Name, args: ExprId) -> EvalResult<Flow> {
        let func_name = self.interner.lookup(callee);
        let body = self
            .env
            .resolve_function(callee)
            .ok_or_else(|| name_not_defined(func_name))?;

        let (params, arg_values) = match self.env.resolve_params(callee) {
            Some(list) => {
                let params = self.param_names(list)?;
                let arg_values = self.eval_arguments(func_name, args)?;
                if params.len() != arg_values.len() {
                    return Err(arity_mismatch(func_name, params.len(), arg_values.len()));
                }
                (params, arg_values)
            }
            None => (Vec::new(), Vec::new()),
        };

        self.env.push_frame()?;
        for (&param, &value) in params.iter().zip(&arg_values) {
            self.env.bind_value(param, value);
        }
        let outcome = self.eval(body);
        let returned = self.env.take_return_value();
        self.env.pop_frame();
        outcome?;

        let result = returned.unwrap_or(ValueId::NONE);
        if self.call_result_binding == CallResultBinding::Enabled {
            self.env.bind_value(callee, result);
        }
        trace!(value = %self.values.get(result), "call returned");
        Ok(Flow::Normal(Some(result)))
    }

    /// Evaluate call arguments left to right in the current frame.
    fn eval_arguments(&mut self, func_name: &str, args: ExprId) -> EvalResult<Vec<ValueId>> {
        let arg_exprs = self.list_items(args, "argument list")?;
        let mut arg_values = Vec::with_capacity(arg_exprs.len());
        for (index, &arg) in arg_exprs.iter().enumerate() {
            if self.arena.is_empty(arg) {
                return Err(malformed_node(format!(
                    "argument {} of {func_name}() is empty",
                    index + 1
                )));
            }
            let Some(value) = self.eval(arg)?.value() else {
                return Err(malformed_node(format!(
                    "argument {} of {func_name}() produced no value",
                    index + 1
                )));
            };
            arg_values.push(value);
        }
        Ok(arg_values)
    }

    /// Items of a `ParamList` node; the empty marker is an empty list.
    fn list_items(&self, id: ExprId, what: &str) -> EvalResult<Vec<ExprId>> {
        match *self.arena.get(id) {
            ExprKind::Empty => Ok(Vec::new()),
            ExprKind::ParamList(range) => Ok(self.arena.list(range).to_vec()),
            ref other => Err(malformed_node(format!(
                "{what} must be a parameter list, found {}",
                other.kind_name()
            ))),
        }
    }

    /// Declared parameter names, in order.
    fn param_names(&self, list: ExprId) -> EvalResult<Vec<Name>> {
        self.list_items(list, "parameter list")?
            .into_iter()
            .map(|item| match *self.arena.get(item) {
                ExprKind::Ident(name) => Ok(name),
                ref other => Err(malformed_node(format!(
                    "parameter must be an identifier, found {}",
                    other.kind_name()
                ))),
            })
            .collect()
    }
}
