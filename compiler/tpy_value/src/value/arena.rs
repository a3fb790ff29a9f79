//! Value arena.
//!
//! Every value produced while a program runs is appended here and addressed by
//! a [`ValueId`]. Nothing is freed until the arena itself is dropped, which
//! the interpreter does once, after evaluation has finished. Handles can
//! therefore cross frame boundaries (return values, re-bound names) freely.

use std::fmt;

use super::Value;

/// Handle to a value stored in a [`ValueArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ValueId(u32);

impl ValueId {
    /// Pre-allocated `None` (slot 0 of every arena).
    pub const NONE: ValueId = ValueId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueId({})", self.0)
    }
}

/// Append-only owner of runtime values.
#[derive(Debug)]
pub struct ValueArena {
    values: Vec<Value>,
}

impl ValueArena {
    pub fn new() -> Self {
        ValueArena {
            values: vec![Value::None],
        }
    }

    /// Store a value and return its handle.
    ///
    /// `None` is never stored twice; it always maps to [`ValueId::NONE`].
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` values.
    pub fn alloc(&mut self, value: Value) -> ValueId {
        if value.is_none() {
            return ValueId::NONE;
        }
        let index = u32::try_from(self.values.len())
            .unwrap_or_else(|_| panic!("value arena exceeded {} values", u32::MAX));
        self.values.push(value);
        ValueId(index)
    }

    /// Read a value. Values are `Copy`, so this hands out an owned copy.
    #[inline]
    pub fn get(&self, id: ValueId) -> Value {
        self.values[id.index()]
    }

    /// Number of stored values, including the shared `None`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: slot 0 holds `None`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ValueArena {
    fn default() -> Self {
        Self::new()
    }
}
