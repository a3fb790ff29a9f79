//! Flat AST node kinds.
//!
//! Statements and expressions share one node type: every node evaluates to an
//! optional value, and statements are the nodes that usually produce none.
//!
//! # Module Structure
//!
//! - `operators`: Binary and unary operators

mod operators;

use std::fmt;

use crate::{ExprId, ExprRange, Name};

pub use operators::{BinaryOp, UnaryOp};

/// Expression/statement node.
///
/// Child slots that the language lets a program leave out (bare `print`,
/// bare `return`, a missing `else`, a function without a parameter list, a
/// call without arguments) hold [`ExprId::EMPTY`] rather than an `Option`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// The empty marker. Only ever stored at `ExprId::EMPTY`.
    Empty,

    /// Variable reference.
    Ident(Name),

    /// Integer literal.
    Int(i64),

    /// Float literal, stored as bits so the node stays `Eq + Hash`.
    Float(u64),

    /// `None` literal.
    None,

    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `target = value`; `target` must be an `Ident`.
    Assign { target: ExprId, value: ExprId },

    /// `print(expr)`; `EMPTY` prints a bare newline.
    Print(ExprId),

    /// `if cond: then_branch else: else_branch`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Block of statements.
    Suite(ExprRange),

    /// `def name(params): body`; `params` is a `ParamList` or `EMPTY`.
    FuncDef {
        name: Name,
        params: ExprId,
        body: ExprId,
    },

    /// `callee(args)`; `args` is a `ParamList` or `EMPTY`.
    Call { callee: Name, args: ExprId },

    /// `return expr`; `EMPTY` returns `None`.
    Return(ExprId),

    /// Parameter names (inside `FuncDef`) or argument expressions (inside `Call`).
    ParamList(ExprRange),
}

impl ExprKind {
    /// Float literal from an `f64`.
    pub fn float(value: f64) -> Self {
        ExprKind::Float(value.to_bits())
    }

    /// Short name of the node kind, for diagnostics and tracing.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ExprKind::Empty => "empty",
            ExprKind::Ident(_) => "identifier",
            ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::None => "literal",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Print(_) => "print",
            ExprKind::If { .. } => "if",
            ExprKind::Suite(_) => "suite",
            ExprKind::FuncDef { .. } => "function definition",
            ExprKind::Call { .. } => "call",
            ExprKind::Return(_) => "return",
            ExprKind::ParamList(_) => "parameter list",
        }
    }
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Empty => write!(f, "Empty"),
            ExprKind::Ident(name) => write!(f, "Ident({name:?})"),
            ExprKind::Int(n) => write!(f, "Int({n})"),
            ExprKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            ExprKind::None => write!(f, "None"),
            ExprKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Assign { target, value } => write!(f, "Assign({target:?}, {value:?})"),
            ExprKind::Print(expr) => write!(f, "Print({expr:?})"),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "If({cond:?}, {then_branch:?}, {else_branch:?})"),
            ExprKind::Suite(range) => write!(f, "Suite({range:?})"),
            ExprKind::FuncDef { name, params, body } => {
                write!(f, "FuncDef({name:?}, {params:?}, {body:?})")
            }
            ExprKind::Call { callee, args } => write!(f, "Call({callee:?}, {args:?})"),
            ExprKind::Return(expr) => write!(f, "Return({expr:?})"),
            ExprKind::ParamList(range) => write!(f, "ParamList({range:?})"),
        }
    }
}
