//! Expression IDs and ranges for the flat AST.
//!
//! - `ExprId(u32)` instead of `Box<Expr>`
//! - `ExprRange` for statement, parameter and argument lists

use std::fmt;

/// Index into an [`ExprArena`](crate::ExprArena).
///
/// There is no "null" id. Optional children point at [`ExprId::EMPTY`], the
/// empty marker node every arena allocates first.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// The empty marker node (always index 0).
    pub const EMPTY: ExprId = ExprId(0);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this id is the empty marker.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "ExprId::EMPTY")
        } else {
            write!(f, "ExprId({})", self.0)
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Range of expressions in the arena's flattened list storage.
///
/// `start` indexes `ExprArena::expr_lists`; `len` is the element count.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprRange {
    pub start: u32,
    pub len: u32,
}

impl ExprRange {
    /// Empty range.
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ExprRange { start, len }
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of expressions.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRange({}..{})", self.start, self.start + self.len)
    }
}

impl Default for ExprRange {
    fn default() -> Self {
        Self::EMPTY
    }
}
