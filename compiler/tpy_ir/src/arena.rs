//! Expression arena.
//!
//! Owns every node of a program. Nodes refer to each other by [`ExprId`]; lists
//! (suite statements, parameters, arguments) live in a shared side table and
//! are addressed by [`ExprRange`].

use crate::{BinaryOp, ExprId, ExprKind, ExprRange, Name, UnaryOp};

/// Flat storage for a program tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an arena holding only the empty marker at [`ExprId::EMPTY`].
    pub fn new() -> Self {
        ExprArena {
            exprs: vec![ExprKind::Empty],
            expr_lists: Vec::new(),
        }
    }

    /// Allocate a node.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(kind);
        ExprId::new(index)
    }

    /// Allocate a list of node ids and return its range.
    ///
    /// # Panics
    /// Panics if the list storage exceeds `u32::MAX` entries.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        let to_u32 = |n: usize| {
            u32::try_from(n).unwrap_or_else(|_| panic!("expression list storage exceeded {} entries", u32::MAX))
        };
        ExprRange::new(to_u32(start), to_u32(self.expr_lists.len() - start))
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Get the ids in a list range.
    #[inline]
    pub fn list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Whether `id` refers to the empty marker.
    #[inline]
    pub fn is_empty(&self, id: ExprId) -> bool {
        matches!(self.get(id), ExprKind::Empty)
    }

    /// Number of nodes, including the empty marker.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    // Node constructors used by tree builders

    pub fn ident(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Ident(name))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc(ExprKind::Int(value))
    }

    pub fn float(&mut self, value: f64) -> ExprId {
        self.alloc(ExprKind::float(value))
    }

    pub fn none(&mut self) -> ExprId {
        self.alloc(ExprKind::None)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    /// `name = value`, allocating the target identifier.
    pub fn assign(&mut self, name: Name, value: ExprId) -> ExprId {
        let target = self.ident(name);
        self.alloc(ExprKind::Assign { target, value })
    }

    pub fn print(&mut self, expr: ExprId) -> ExprId {
        self.alloc(ExprKind::Print(expr))
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn suite(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.alloc_list(stmts);
        self.alloc(ExprKind::Suite(range))
    }

    pub fn param_list(&mut self, items: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.alloc_list(items);
        self.alloc(ExprKind::ParamList(range))
    }

    /// `def name(params): body`. `None` leaves the parameter slot empty;
    /// `Some(&[])` declares an explicit, empty parameter list.
    pub fn func_def(&mut self, name: Name, params: Option<&[Name]>, body: ExprId) -> ExprId {
        let params = match params {
            Some(names) => {
                let idents: Vec<ExprId> = names.iter().map(|&n| self.ident(n)).collect();
                self.param_list(idents)
            }
            None => ExprId::EMPTY,
        };
        self.alloc(ExprKind::FuncDef { name, params, body })
    }

    /// `callee(args)`. `None` leaves the argument slot empty.
    pub fn call(&mut self, callee: Name, args: Option<Vec<ExprId>>) -> ExprId {
        let args = match args {
            Some(args) => self.param_list(args),
            None => ExprId::EMPTY,
        };
        self.alloc(ExprKind::Call { callee, args })
    }

    pub fn ret(&mut self, expr: ExprId) -> ExprId {
        self.alloc(ExprKind::Return(expr))
    }
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}
