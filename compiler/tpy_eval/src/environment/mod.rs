//! Frame stack for name resolution.
//!
//! The global frame sits at index 0 and is never popped. Every call pushes a
//! fresh frame holding that call's values, nested function definitions,
//! parameter lists and its return slot.
//!
//! Lookups walk the live stack from the top down, so a function sees the
//! bindings of whoever called it (stack-based resolution), not those of the
//! block it was defined in.

use rustc_hash::FxHashMap;
use tracing::trace;

use tpy_ir::{ExprId, Name};
use tpy_value::{recursion_limit_exceeded, EvalResult, ValueId};

/// Frames allowed above the global frame unless configured otherwise.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// A value binding in a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Bound(ValueId),
    /// Assigned somewhere in the running block, but not yet.
    Unbound,
}

/// Why `resolve_value` found nothing to return.
///
/// The caller owns the interner and turns this into the user-facing error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No frame mentions the name.
    NotDefined,
    /// The nearest frame mentioning the name holds the unbound marker.
    Unbound,
}

/// One call scope.
#[derive(Debug, Default)]
struct Frame {
    values: FxHashMap<Name, Slot>,
    functions: FxHashMap<Name, ExprId>,
    params: FxHashMap<Name, ExprId>,
    return_value: Option<ValueId>,
}

/// The frame stack.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
    recursion_limit: usize,
}

impl Environment {
    /// Create an environment holding only the global frame.
    pub fn new(recursion_limit: usize) -> Self {
        Environment {
            frames: vec![Frame::default()],
            recursion_limit,
        }
    }

    /// Frames above the global frame.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    #[inline]
    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Push an empty frame.
    ///
    /// Fails once `depth()` has reached the recursion limit, so exactly
    /// `recursion_limit` nested pushes succeed.
    pub fn push_frame(&mut self) -> EvalResult<()> {
        if self.depth() >= self.recursion_limit {
            return Err(recursion_limit_exceeded(self.recursion_limit));
        }
        self.frames.push(Frame::default());
        trace!(depth = self.depth(), "push frame");
        Ok(())
    }

    /// Pop the top frame. The global frame stays.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            trace!(depth = self.depth(), "pop frame");
        }
    }

    fn top(&self) -> &Frame {
        // frames[0] is never removed
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Resolve a value; the nearest frame mentioning `name` decides.
    pub fn resolve_value(&self, name: Name) -> Result<ValueId, LookupError> {
        for frame in self.frames.iter().rev() {
            match frame.values.get(&name) {
                Some(Slot::Bound(id)) => return Ok(*id),
                Some(Slot::Unbound) => return Err(LookupError::Unbound),
                None => {}
            }
        }
        Err(LookupError::NotDefined)
    }

    /// Resolve a function body by name.
    pub fn resolve_function(&self, name: Name) -> Option<ExprId> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.functions.get(&name).copied())
    }

    /// Resolve the parameter list declared for a function name.
    pub fn resolve_params(&self, name: Name) -> Option<ExprId> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.params.get(&name).copied())
    }

    /// Bind a value in the top frame, replacing any unbound marker.
    pub fn bind_value(&mut self, name: Name, value: ValueId) {
        self.top_mut().values.insert(name, Slot::Bound(value));
    }

    pub fn bind_function(&mut self, name: Name, body: ExprId) {
        self.top_mut().functions.insert(name, body);
    }

    pub fn bind_params(&mut self, name: Name, params: ExprId) {
        self.top_mut().params.insert(name, params);
    }

    /// Forget a parameter list declared in the top frame.
    ///
    /// Lists declared in lower frames stay visible.
    pub fn clear_params(&mut self, name: Name) {
        self.top_mut().params.remove(&name);
    }

    /// Mark `name` local to the running block.
    ///
    /// Any value already bound in the top frame is replaced, so the name
    /// reads as unbound until the block assigns it.
    pub fn mark_unbound(&mut self, name: Name) {
        self.top_mut().values.insert(name, Slot::Unbound);
    }

    /// Slot for `name` in the top frame only.
    pub fn local_slot(&self, name: Name) -> Option<Slot> {
        self.top().values.get(&name).copied()
    }

    /// Record the value a `return` produced in the top frame.
    pub fn signal_return(&mut self, value: ValueId) {
        self.top_mut().return_value = Some(value);
    }

    pub fn has_return_signal(&self) -> bool {
        self.top().return_value.is_some()
    }

    /// Take the top frame's return value, clearing the signal.
    pub fn take_return_value(&mut self) -> Option<ValueId> {
        self.top_mut().return_value.take()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
