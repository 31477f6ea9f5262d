//! AST node definitions.
//!
//! Nodes form a tree through three owned link kinds: the `next` sibling
//! link, the body chain of parent nodes, and the else-chain of conditional
//! nodes. The `prev` back-reference is weak so that dropping a chain never
//! recurses through it.

use core::fmt;
use std::{
    cell::RefCell,
    fmt::{Display, Formatter},
    rc::{Rc, Weak},
};

use crate::literal::{FloatKind, IntKind};

/// Source position of the token most recently consumed when a node was
/// created. Rows and columns are 1-based.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, serde::Serialize)]
pub struct Location {
    pub row: u32,
    pub col: u32,
}

impl Location {
    #[must_use]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

pub type NodeRef = Rc<Node>;

/// A single tree element. The syntactic shape lives in `kind`; the sibling
/// links are shared by every variant.
#[derive(Debug, serde::Serialize)]
pub struct Node {
    pub id: u32,
    pub loc: Location,
    pub kind: NodeKind,
    pub(crate) next: RefCell<Option<NodeRef>>,
    #[serde(skip)]
    pub(crate) prev: RefCell<Weak<Node>>,
}

/// Closed set of node variants. Child slots own their subtrees; slots that
/// the grammar may leave empty are `Option`.
#[derive(Debug, serde::Serialize)]
pub enum NodeKind {
    IntLit {
        text: String,
        kind: IntKind,
    },
    FloatLit {
        text: String,
        kind: FloatKind,
    },
    StrLit {
        text: String,
    },
    BoolLit {
        value: bool,
    },
    Modifier {
        modifier: Modifier,
    },
    Type {
        tag: TypeTag,
        name: Option<String>,
        ext: Option<NodeRef>,
    },
    BinOp {
        op: BinOpKind,
        lhs: NodeRef,
        rhs: NodeRef,
    },
    NamedVal {
        name: String,
        ty: Option<NodeRef>,
    },
    FuncCall {
        name: String,
        args: Option<NodeRef>,
    },
    Var {
        name: String,
    },
    Ret {
        expr: Option<NodeRef>,
    },
    LetBinding {
        name: String,
        modifiers: Option<NodeRef>,
        ty: Option<NodeRef>,
        value: Option<NodeRef>,
    },
    VarDecl {
        name: String,
        modifiers: Option<NodeRef>,
        ty: Option<NodeRef>,
        value: Option<NodeRef>,
    },
    VarAssign {
        target: NodeRef,
        value: NodeRef,
    },
    If {
        cond: NodeRef,
        body: Option<NodeRef>,
        /// Next branch of the else/elif chain, attached by the linker as
        /// each clause reduces.
        else_arm: RefCell<Option<NodeRef>>,
    },
    FuncDecl {
        name: String,
        modifiers: Option<NodeRef>,
        ret_ty: Option<NodeRef>,
        params: Option<NodeRef>,
        body: Option<NodeRef>,
    },
    DataDecl {
        name: String,
        body: Option<NodeRef>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub enum Modifier {
    Pub,
    Priv,
    Mut,
    Const,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub enum BinOpKind {
    Pow,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Resolved type tag of a `Type` node: a concrete numeric width, a builtin,
/// or a user-named type (the name lives in the node's `name` field).
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub enum TypeTag {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F16,
    F32,
    F64,
    Bool,
    Str,
    Named,
}

impl From<IntKind> for TypeTag {
    fn from(kind: IntKind) -> Self {
        match kind {
            IntKind::I8 => TypeTag::I8,
            IntKind::I16 => TypeTag::I16,
            IntKind::I32 => TypeTag::I32,
            IntKind::I64 => TypeTag::I64,
            IntKind::U8 => TypeTag::U8,
            IntKind::U16 => TypeTag::U16,
            IntKind::U32 => TypeTag::U32,
            IntKind::U64 => TypeTag::U64,
        }
    }
}

impl From<FloatKind> for TypeTag {
    fn from(kind: FloatKind) -> Self {
        match kind {
            FloatKind::F16 => TypeTag::F16,
            FloatKind::F32 => TypeTag::F32,
            FloatKind::F64 => TypeTag::F64,
        }
    }
}

impl Node {
    pub(crate) fn new(id: u32, loc: Location, kind: NodeKind) -> NodeRef {
        Rc::new(Node {
            id,
            loc,
            kind,
            next: RefCell::new(None),
            prev: RefCell::new(Weak::new()),
        })
    }

    /// Next sibling in the chain, if any.
    #[must_use]
    pub fn next(&self) -> Option<NodeRef> {
        self.next.borrow().clone()
    }

    /// Preceding sibling, if this node was linked after one and the chain
    /// head is still alive.
    #[must_use]
    pub fn prev(&self) -> Option<NodeRef> {
        self.prev.borrow().upgrade()
    }

    /// Head of the owned body chain for parent nodes (`If`, `FuncDecl`,
    /// `DataDecl`); `None` for every other variant.
    #[must_use]
    pub fn block_body(&self) -> Option<NodeRef> {
        match &self.kind {
            NodeKind::If { body, .. }
            | NodeKind::FuncDecl { body, .. }
            | NodeKind::DataDecl { body, .. } => body.clone(),
            _ => None,
        }
    }

    /// Next branch of a conditional's else/elif chain; `None` for terminal
    /// branches and non-conditional nodes.
    #[must_use]
    pub fn else_arm(&self) -> Option<NodeRef> {
        match &self.kind {
            NodeKind::If { else_arm, .. } => else_arm.borrow().clone(),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::IntLit { .. } => "IntLit",
            NodeKind::FloatLit { .. } => "FloatLit",
            NodeKind::StrLit { .. } => "StrLit",
            NodeKind::BoolLit { .. } => "BoolLit",
            NodeKind::Modifier { .. } => "Modifier",
            NodeKind::Type { .. } => "Type",
            NodeKind::BinOp { .. } => "BinOp",
            NodeKind::NamedVal { .. } => "NamedVal",
            NodeKind::FuncCall { .. } => "FuncCall",
            NodeKind::Var { .. } => "Var",
            NodeKind::Ret { .. } => "Ret",
            NodeKind::LetBinding { .. } => "LetBinding",
            NodeKind::VarDecl { .. } => "VarDecl",
            NodeKind::VarAssign { .. } => "VarAssign",
            NodeKind::If { .. } => "If",
            NodeKind::FuncDecl { .. } => "FuncDecl",
            NodeKind::DataDecl { .. } => "DataDecl",
        }
    }
}

/// Iterator over a sibling chain, starting at `head`.
#[must_use]
pub fn siblings(head: Option<NodeRef>) -> Siblings {
    Siblings { cur: head }
}

pub struct Siblings {
    cur: Option<NodeRef>,
}

impl Iterator for Siblings {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        let node = self.cur.take()?;
        self.cur = node.next();
        Some(node)
    }
}
