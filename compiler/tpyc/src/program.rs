//! Program files.
//!
//! A program is a JSON document describing the tree, externally tagged with
//! snake_case node names:
//!
//! ```json
//! {"suite": [
//!   {"func_def": {"name": "f", "params": ["a"], "body": {"suite": [
//!     {"return": {"binary": {"op": "add", "left": {"ident": "a"}, "right": {"int": 1}}}}]}}},
//!   {"print": {"call": {"callee": "f", "args": [{"int": 41}]}}}
//! ]}
//! ```
//!
//! Decoding goes through the owned [`Node`] tree, which is then lowered into
//! a flat [`ExprArena`]. Optional children (`print` and `return` arguments,
//! `else`, `params`, `args`) lower to the empty marker when absent.

use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use tpy_ir::{BinaryOp, ExprArena, ExprId, ExprKind, Name, SharedInterner, UnaryOp};

/// Decoded program node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Ident(String),
    Int(i64),
    Float(f64),
    None,
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Assign {
        target: String,
        value: Box<Node>,
    },
    /// `null` prints an empty line.
    Print(Option<Box<Node>>),
    If {
        cond: Box<Node>,
        then: Box<Node>,
        #[serde(default, rename = "else")]
        otherwise: Option<Box<Node>>,
    },
    Suite(Vec<Node>),
    FuncDef {
        name: String,
        /// Absent means the function declares no parameter list at all.
        #[serde(default)]
        params: Option<Vec<String>>,
        body: Box<Node>,
    },
    Call {
        callee: String,
        #[serde(default)]
        args: Option<Vec<Node>>,
    },
    /// `null` returns `None`.
    Return(Option<Box<Node>>),
}

/// Failure to turn a file into a runnable program.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid program: {0}")]
    Json(#[from] serde_json::Error),
    #[error("program root must be a suite, found {found}")]
    RootNotSuite { found: &'static str },
}

/// A lowered program, ready for an interpreter.
pub struct Program {
    pub interner: SharedInterner,
    pub arena: ExprArena,
    /// Always a `Suite` node.
    pub root: ExprId,
}

impl Program {
    /// Read and lower a program file; `-` reads standard input.
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let text = if path == "-" {
            io::read_to_string(io::stdin()).map_err(|source| LoadError::Io {
                path: path.to_string(),
                source,
            })?
        } else {
            read_file(Path::new(path))?
        };
        Self::from_json(&text)
    }

    /// Decode and lower a JSON program.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let node: Node = serde_json::from_str(text)?;
        Self::from_node(&node)
    }

    /// Lower a decoded tree. The root must be a suite.
    pub fn from_node(node: &Node) -> Result<Self, LoadError> {
        let mut lowerer = Lowerer {
            interner: SharedInterner::default(),
            arena: ExprArena::new(),
        };
        let root = lowerer.lower(node);
        if !matches!(lowerer.arena.get(root), ExprKind::Suite(_)) {
            return Err(LoadError::RootNotSuite {
                found: lowerer.arena.get(root).kind_name(),
            });
        }
        debug!(nodes = lowerer.arena.len(), "program lowered");
        Ok(Program {
            interner: lowerer.interner,
            arena: lowerer.arena,
            root,
        })
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source: e },
        }
    })
}

struct Lowerer {
    interner: SharedInterner,
    arena: ExprArena,
}

impl Lowerer {
    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn lower_opt(&mut self, node: Option<&Node>) -> ExprId {
        match node {
            Some(node) => self.lower(node),
            None => ExprId::EMPTY,
        }
    }

    fn lower(&mut self, node: &Node) -> ExprId {
        match node {
            Node::Ident(name) => {
                let name = self.name(name);
                self.arena.ident(name)
            }
            Node::Int(n) => self.arena.int(*n),
            Node::Float(f) => self.arena.float(*f),
            Node::None => self.arena.none(),
            Node::Unary { op, operand } => {
                let operand = self.lower(operand);
                self.arena.unary(*op, operand)
            }
            Node::Binary { op, left, right } => {
                let left = self.lower(left);
                let right = self.lower(right);
                self.arena.binary(*op, left, right)
            }
            Node::Assign { target, value } => {
                let value = self.lower(value);
                let target = self.name(target);
                self.arena.assign(target, value)
            }
            Node::Print(expr) => {
                let expr = self.lower_opt(expr.as_deref());
                self.arena.print(expr)
            }
            Node::If {
                cond,
                then,
                otherwise,
            } => {
                let cond = self.lower(cond);
                let then_branch = self.lower(then);
                let else_branch = self.lower_opt(otherwise.as_deref());
                self.arena.if_else(cond, then_branch, else_branch)
            }
            Node::Suite(stmts) => {
                let stmts: Vec<ExprId> = stmts.iter().map(|stmt| self.lower(stmt)).collect();
                self.arena.suite(stmts)
            }
            Node::FuncDef { name, params, body } => {
                let body = self.lower(body);
                let params: Option<Vec<Name>> = params
                    .as_ref()
                    .map(|ps| ps.iter().map(|p| self.name(p)).collect());
                let name = self.name(name);
                self.arena.func_def(name, params.as_deref(), body)
            }
            Node::Call { callee, args } => {
                let args = args
                    .as_ref()
                    .map(|args| args.iter().map(|arg| self.lower(arg)).collect());
                let callee = self.name(callee);
                self.arena.call(callee, args)
            }
            Node::Return(expr) => {
                let expr = self.lower_opt(expr.as_deref());
                self.arena.ret(expr)
            }
        }
    }
}
