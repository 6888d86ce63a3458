//! Conversions between typed slot contents and [`Node`].
//!
//! Rewriters see every child as a [`Node`]. A slot typed as a concrete
//! struct (a selector's `Ident`, a loop's `BlockStmt`) takes it back only if
//! the node still has that kind; anything else is a kind mismatch.

use graft_ast::{
    BasicLit, BlockStmt, CallExpr, Comment, CommentGroup, Decl, Expr, Field, FieldList, File,
    FuncType, Ident, Node, NodeKind, Spec, Stmt,
};

use crate::dispatch::SlotType;

/// A type that can fill a child slot.
pub trait SlotNode: Sized {
    /// What a slot of this type accepts.
    const SLOT: SlotType;

    /// Wraps the value as a node.
    fn into_node(self) -> Node;

    /// Unwraps a node, handing it back unchanged on a kind mismatch.
    ///
    /// # Errors
    ///
    /// Returns the node if its kind does not fit [`Self::SLOT`].
    fn from_node(node: Node) -> Result<Self, Node>;
}

macro_rules! slot_node {
    ($($ty:ty: $slot:expr, $value:ident => $into:expr, $pat:pat => $from:expr;)*) => {
        $(
            impl SlotNode for $ty {
                const SLOT: SlotType = $slot;

                fn into_node(self) -> Node {
                    let $value = self;
                    $into
                }

                fn from_node(node: Node) -> Result<Self, Node> {
                    match node {
                        $pat => Ok($from),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

slot_node! {
    Expr: SlotType::Expr, e => Node::Expr(e), Node::Expr(e) => e;
    Stmt: SlotType::Stmt, s => Node::Stmt(s), Node::Stmt(s) => s;
    Decl: SlotType::Decl, d => Node::Decl(d), Node::Decl(d) => d;
    Spec: SlotType::Spec, s => Node::Spec(s), Node::Spec(s) => s;
    Ident: SlotType::Kind(NodeKind::Ident),
        i => Node::Expr(Expr::Ident(i)),
        Node::Expr(Expr::Ident(i)) => i;
    BasicLit: SlotType::Kind(NodeKind::BasicLit),
        l => Node::Expr(Expr::BasicLit(l)),
        Node::Expr(Expr::BasicLit(l)) => l;
    FuncType: SlotType::Kind(NodeKind::FuncType),
        t => Node::Expr(Expr::FuncType(Box::new(t))),
        Node::Expr(Expr::FuncType(t)) => *t;
    CallExpr: SlotType::Kind(NodeKind::CallExpr),
        c => Node::Expr(Expr::Call(Box::new(c))),
        Node::Expr(Expr::Call(c)) => *c;
    BlockStmt: SlotType::Kind(NodeKind::BlockStmt),
        b => Node::Stmt(Stmt::Block(Box::new(b))),
        Node::Stmt(Stmt::Block(b)) => *b;
    Field: SlotType::Kind(NodeKind::Field), f => Node::Field(Box::new(f)), Node::Field(f) => *f;
    FieldList: SlotType::Kind(NodeKind::FieldList), l => Node::FieldList(l), Node::FieldList(l) => l;
    Comment: SlotType::Kind(NodeKind::Comment), c => Node::Comment(c), Node::Comment(c) => c;
    CommentGroup: SlotType::Kind(NodeKind::CommentGroup),
        g => Node::CommentGroup(g),
        Node::CommentGroup(g) => g;
    File: SlotType::Kind(NodeKind::File), f => Node::File(Box::new(f)), Node::File(f) => *f;
}
