//! tpy IR - the tree handed to the evaluator.
//!
//! This crate contains the data structures the evaluator walks:
//! - Names for interned identifiers
//! - `ExprId` / `ExprRange` handles into a flat expression arena
//! - AST nodes (`ExprKind`) and operators
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **No Null Links**: every optional child slot points at the empty marker
//!   node (`ExprId::EMPTY`), so "is this side empty" is always answerable
//!
//! Float literals are stored as `u64` bits so every node stays `Eq + Hash`.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{BinaryOp, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
