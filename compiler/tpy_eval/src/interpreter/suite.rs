//! Statement blocks.

use tpy_ir::{ExprKind, ExprRange};
use tpy_value::EvalResult;

use super::{Flow, Interpreter};

impl Interpreter<'_> {
    /// Run a block's statements in order.
    ///
    /// Before the first statement runs, every name the block itself assigns
    /// is marked local, so reading it ahead of its assignment fails with
    /// `UnboundLocalError` instead of finding an outer binding. Only the
    /// block's own top-level assignments count; nested blocks mark theirs
    /// when they run.
    pub(super) fn eval_suite(&mut self, range: ExprRange) -> EvalResult<Flow> {
        let arena = self.arena;
        let stmts = arena.list(range);
        for &stmt in stmts {
            if let ExprKind::Assign { target, .. } = *arena.get(stmt) {
                if let ExprKind::Ident(name) = *arena.get(target) {
                    self.env.mark_unbound(name);
                }
            }
        }

        for &stmt in stmts {
            if let flow @ Flow::Return(_) = self.eval(stmt)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal(None))
    }
}
