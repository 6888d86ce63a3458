//! Go-style syntax trees for graft.
//!
//! This crate provides:
//! - [`Node`] - An owned node of any of the 55 kinds in [`NodeKind`]
//! - Typed families ([`Expr`], [`Stmt`], [`Spec`], [`Decl`]) and their structs
//! - [`CommentGroup`] - Shared comment handles, visible from both the
//!   documented node and [`File::comments`]
//! - [`Visitor`] and [`inspect`] - Read-only traversal over [`NodeRef`]
//! - [`outline`] - A compact S-expression rendering for tests and logs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Implements `From<Struct> for Family` for boxed family variants.
macro_rules! boxed_variants {
    ($family:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        $(
            impl From<$ty> for $family {
                fn from(node: $ty) -> Self {
                    Self::$variant(Box::new(node))
                }
            }
        )*
    };
}
pub(crate) use boxed_variants;

pub mod comment;
pub mod decl;
pub mod expr;
pub mod field;
pub mod file;
pub mod node;
pub mod outline;
pub mod stmt;
pub mod token;
pub mod visit;

pub use comment::{Comment, CommentGroup};
pub use decl::{Decl, FuncDecl, GenDecl, ImportSpec, Spec, TypeSpec, ValueSpec};
pub use expr::{
    ArrayType, BasicLit, BinaryExpr, CallExpr, ChanType, CompositeLit, Ellipsis, Expr, FuncLit,
    FuncType, Ident, IndexExpr, InterfaceType, KeyValueExpr, MapType, ParenExpr, SelectorExpr,
    SliceExpr, StarExpr, StructType, TypeAssertExpr, UnaryExpr,
};
pub use field::{Field, FieldList};
pub use file::{File, Package};
pub use node::{Category, Node, NodeKind};
pub use outline::outline;
pub use stmt::{
    AssignStmt, BlockStmt, BranchStmt, CaseClause, CommClause, DeclStmt, DeferStmt, ExprStmt,
    ForStmt, GoStmt, IfStmt, IncDecStmt, LabeledStmt, RangeStmt, ReturnStmt, SelectStmt,
    SendStmt, Stmt, SwitchStmt, TypeSwitchStmt,
};
pub use token::{ChanDir, LitKind, Token};
pub use visit::{
    CommentCollector, DepthCalculator, KindCounter, NodeRef, Visitor, inspect, walk_ref,
};
