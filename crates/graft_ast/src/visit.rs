//! Read-only traversal of syntax trees.
//!
//! This module provides:
//! - [`NodeRef`] - A borrowed view of any node, including concrete-typed
//!   children such as a selector's [`Ident`] or a function's [`BlockStmt`]
//! - [`Visitor`] - Enter/leave callbacks driven by [`walk_ref`]
//! - [`inspect`] - Closure-based traversal
//!
//! # Example
//!
//! ```
//! use graft_ast::{Expr, Node, NodeRef, inspect};
//!
//! let call = Node::from(Expr::call(Expr::ident("f"), vec![Expr::ident("x")]));
//! let mut idents = Vec::new();
//! inspect(call.view(), |node| {
//!     if let NodeRef::Expr(Expr::Ident(ident)) = node {
//!         idents.push(ident.name.clone());
//!     }
//!     true
//! });
//! assert_eq!(idents, vec!["f", "x"]);
//! ```

use std::collections::BTreeMap;

use crate::comment::{Comment, CommentGroup};
use crate::decl::{Decl, Spec};
use crate::expr::{BasicLit, CallExpr, Expr, FuncType, Ident};
use crate::field::{Field, FieldList};
use crate::file::{File, Package};
use crate::node::NodeKind;
use crate::stmt::{BlockStmt, Stmt};

/// A borrowed node.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    /// A comment
    Comment(&'a Comment),
    /// A comment group
    CommentGroup(&'a CommentGroup),
    /// A field
    Field(&'a Field),
    /// A field list
    FieldList(&'a FieldList),
    /// Any expression
    Expr(&'a Expr),
    /// An identifier held in an identifier-typed slot
    Ident(&'a Ident),
    /// A literal held in a literal-typed slot
    BasicLit(&'a BasicLit),
    /// A signature held in a signature-typed slot
    FuncType(&'a FuncType),
    /// A call held in a call-typed slot
    CallExpr(&'a CallExpr),
    /// Any statement
    Stmt(&'a Stmt),
    /// A block held in a block-typed slot
    Block(&'a BlockStmt),
    /// A specification
    Spec(&'a Spec),
    /// A declaration
    Decl(&'a Decl),
    /// A source file
    File(&'a File),
    /// A package
    Package(&'a Package),
}

impl NodeRef<'_> {
    /// Returns the kind tag of the borrowed node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Comment(_) => NodeKind::Comment,
            Self::CommentGroup(_) => NodeKind::CommentGroup,
            Self::Field(_) => NodeKind::Field,
            Self::FieldList(_) => NodeKind::FieldList,
            Self::Expr(e) => e.kind(),
            Self::Ident(_) => NodeKind::Ident,
            Self::BasicLit(_) => NodeKind::BasicLit,
            Self::FuncType(_) => NodeKind::FuncType,
            Self::CallExpr(_) => NodeKind::CallExpr,
            Self::Stmt(s) => s.kind(),
            Self::Block(_) => NodeKind::BlockStmt,
            Self::Spec(s) => s.kind(),
            Self::Decl(d) => d.kind(),
            Self::File(_) => NodeKind::File,
            Self::Package(_) => NodeKind::Package,
        }
    }
}

// =============================================================================
// Read-Only Visitor
// =============================================================================

/// Trait for read-only tree visitors.
///
/// The default implementations descend everywhere and do nothing.
#[allow(unused_variables)]
pub trait Visitor {
    /// Called before a node's children. Return false to skip them; `leave`
    /// is then not called for this node.
    fn enter(&mut self, node: NodeRef<'_>) -> bool {
        true
    }

    /// Called after all of a node's children have been visited.
    fn leave(&mut self, node: NodeRef<'_>) {}
}

/// Walk a node depth-first, calling `enter` before and `leave` after its
/// children. Children are visited in slot order.
pub fn walk_ref<V: Visitor + ?Sized>(visitor: &mut V, node: NodeRef<'_>) {
    if !visitor.enter(node) {
        return;
    }
    walk_children(visitor, node);
    visitor.leave(node);
}

/// Calls `f` for every node in pre-order; returning false skips the
/// node's children.
pub fn inspect<F>(node: NodeRef<'_>, f: F)
where
    F: FnMut(NodeRef<'_>) -> bool,
{
    struct Inspector<F>(F);

    impl<F> Visitor for Inspector<F>
    where
        F: FnMut(NodeRef<'_>) -> bool,
    {
        fn enter(&mut self, node: NodeRef<'_>) -> bool {
            (self.0)(node)
        }
    }

    walk_ref(&mut Inspector(f), node);
}

fn walk_children<V: Visitor + ?Sized>(v: &mut V, node: NodeRef<'_>) {
    match node {
        NodeRef::Comment(_) | NodeRef::Ident(_) | NodeRef::BasicLit(_) => {}
        NodeRef::CommentGroup(group) => {
            // Copy out so a visitor may edit the group while its comments are visited.
            let comments = group.comments().to_vec();
            for comment in &comments {
                walk_ref(v, NodeRef::Comment(comment));
            }
        }
        NodeRef::Field(field) => {
            group(v, field.doc.as_ref());
            idents(v, &field.names);
            walk_ref(v, NodeRef::Expr(&field.ty));
            if let Some(tag) = &field.tag {
                walk_ref(v, NodeRef::BasicLit(tag));
            }
            group(v, field.comment.as_ref());
        }
        NodeRef::FieldList(list) => {
            for field in &list.list {
                walk_ref(v, NodeRef::Field(field));
            }
        }
        NodeRef::Expr(expr) => walk_expr(v, expr),
        NodeRef::FuncType(ty) => walk_func_type(v, ty),
        NodeRef::CallExpr(call) => walk_call(v, call),
        NodeRef::Stmt(stmt) => walk_stmt(v, stmt),
        NodeRef::Block(block) => stmts(v, &block.list),
        NodeRef::Spec(spec) => walk_spec(v, spec),
        NodeRef::Decl(decl) => walk_decl(v, decl),
        NodeRef::File(file) => {
            group(v, file.doc.as_ref());
            walk_ref(v, NodeRef::Ident(&file.name));
            for decl in &file.decls {
                walk_ref(v, NodeRef::Decl(decl));
            }
        }
        NodeRef::Package(package) => {
            for file in &package.files {
                walk_ref(v, NodeRef::File(file));
            }
        }
    }
}

fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Expr) {
    match expr {
        Expr::Bad | Expr::Ident(_) | Expr::BasicLit(_) => {}
        Expr::Ellipsis(e) => opt_expr(v, e.elt.as_ref()),
        Expr::FuncLit(e) => {
            walk_ref(v, NodeRef::FuncType(&e.ty));
            walk_ref(v, NodeRef::Block(&e.body));
        }
        Expr::CompositeLit(e) => {
            opt_expr(v, e.ty.as_ref());
            exprs(v, &e.elts);
        }
        Expr::Paren(e) => walk_ref(v, NodeRef::Expr(&e.x)),
        Expr::Selector(e) => {
            walk_ref(v, NodeRef::Expr(&e.x));
            walk_ref(v, NodeRef::Ident(&e.sel));
        }
        Expr::Index(e) => {
            walk_ref(v, NodeRef::Expr(&e.x));
            walk_ref(v, NodeRef::Expr(&e.index));
        }
        Expr::Slice(e) => {
            walk_ref(v, NodeRef::Expr(&e.x));
            opt_expr(v, e.low.as_ref());
            opt_expr(v, e.high.as_ref());
            opt_expr(v, e.max.as_ref());
        }
        Expr::TypeAssert(e) => {
            walk_ref(v, NodeRef::Expr(&e.x));
            opt_expr(v, e.ty.as_ref());
        }
        Expr::Call(e) => walk_call(v, e),
        Expr::Star(e) => walk_ref(v, NodeRef::Expr(&e.x)),
        Expr::Unary(e) => walk_ref(v, NodeRef::Expr(&e.x)),
        Expr::Binary(e) => {
            walk_ref(v, NodeRef::Expr(&e.x));
            walk_ref(v, NodeRef::Expr(&e.y));
        }
        Expr::KeyValue(e) => {
            walk_ref(v, NodeRef::Expr(&e.key));
            walk_ref(v, NodeRef::Expr(&e.value));
        }
        Expr::ArrayType(e) => {
            opt_expr(v, e.len.as_ref());
            walk_ref(v, NodeRef::Expr(&e.elt));
        }
        Expr::StructType(e) => walk_ref(v, NodeRef::FieldList(&e.fields)),
        Expr::FuncType(e) => walk_func_type(v, e),
        Expr::InterfaceType(e) => opt_field_list(v, e.methods.as_ref()),
        Expr::MapType(e) => {
            walk_ref(v, NodeRef::Expr(&e.key));
            walk_ref(v, NodeRef::Expr(&e.value));
        }
        Expr::ChanType(e) => walk_ref(v, NodeRef::Expr(&e.value)),
    }
}

fn walk_func_type<V: Visitor + ?Sized>(v: &mut V, ty: &FuncType) {
    opt_field_list(v, ty.params.as_ref());
    opt_field_list(v, ty.results.as_ref());
}

fn walk_call<V: Visitor + ?Sized>(v: &mut V, call: &CallExpr) {
    walk_ref(v, NodeRef::Expr(&call.fun));
    exprs(v, &call.args);
}

fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Bad | Stmt::Empty => {}
        Stmt::Decl(s) => walk_ref(v, NodeRef::Decl(&s.decl)),
        Stmt::Labeled(s) => {
            walk_ref(v, NodeRef::Ident(&s.label));
            walk_ref(v, NodeRef::Stmt(&s.stmt));
        }
        Stmt::Expr(s) => walk_ref(v, NodeRef::Expr(&s.x)),
        Stmt::Send(s) => {
            walk_ref(v, NodeRef::Expr(&s.chan));
            walk_ref(v, NodeRef::Expr(&s.value));
        }
        Stmt::IncDec(s) => walk_ref(v, NodeRef::Expr(&s.x)),
        Stmt::Assign(s) => {
            exprs(v, &s.lhs);
            exprs(v, &s.rhs);
        }
        Stmt::Go(s) => walk_ref(v, NodeRef::CallExpr(&s.call)),
        Stmt::Defer(s) => walk_ref(v, NodeRef::CallExpr(&s.call)),
        Stmt::Return(s) => exprs(v, &s.results),
        Stmt::Branch(s) => {
            if let Some(label) = &s.label {
                walk_ref(v, NodeRef::Ident(label));
            }
        }
        Stmt::Block(s) => stmts(v, &s.list),
        Stmt::If(s) => {
            opt_stmt(v, s.init.as_ref());
            walk_ref(v, NodeRef::Expr(&s.cond));
            walk_ref(v, NodeRef::Block(&s.body));
            opt_stmt(v, s.else_branch.as_ref());
        }
        Stmt::CaseClause(s) => {
            exprs(v, &s.list);
            stmts(v, &s.body);
        }
        Stmt::Switch(s) => {
            opt_stmt(v, s.init.as_ref());
            opt_expr(v, s.tag.as_ref());
            walk_ref(v, NodeRef::Block(&s.body));
        }
        Stmt::TypeSwitch(s) => {
            opt_stmt(v, s.init.as_ref());
            walk_ref(v, NodeRef::Stmt(&s.assign));
            walk_ref(v, NodeRef::Block(&s.body));
        }
        Stmt::CommClause(s) => {
            opt_stmt(v, s.comm.as_ref());
            stmts(v, &s.body);
        }
        Stmt::Select(s) => walk_ref(v, NodeRef::Block(&s.body)),
        Stmt::For(s) => {
            opt_stmt(v, s.init.as_ref());
            opt_expr(v, s.cond.as_ref());
            opt_stmt(v, s.post.as_ref());
            walk_ref(v, NodeRef::Block(&s.body));
        }
        Stmt::Range(s) => {
            opt_expr(v, s.key.as_ref());
            opt_expr(v, s.value.as_ref());
            walk_ref(v, NodeRef::Expr(&s.x));
            walk_ref(v, NodeRef::Block(&s.body));
        }
    }
}

fn walk_spec<V: Visitor + ?Sized>(v: &mut V, spec: &Spec) {
    match spec {
        Spec::Import(s) => {
            group(v, s.doc.as_ref());
            if let Some(name) = &s.name {
                walk_ref(v, NodeRef::Ident(name));
            }
            walk_ref(v, NodeRef::BasicLit(&s.path));
            group(v, s.comment.as_ref());
        }
        Spec::Value(s) => {
            group(v, s.doc.as_ref());
            idents(v, &s.names);
            opt_expr(v, s.ty.as_ref());
            exprs(v, &s.values);
            group(v, s.comment.as_ref());
        }
        Spec::Type(s) => {
            group(v, s.doc.as_ref());
            walk_ref(v, NodeRef::Ident(&s.name));
            walk_ref(v, NodeRef::Expr(&s.ty));
            group(v, s.comment.as_ref());
        }
    }
}

fn walk_decl<V: Visitor + ?Sized>(v: &mut V, decl: &Decl) {
    match decl {
        Decl::Bad => {}
        Decl::Gen(d) => {
            group(v, d.doc.as_ref());
            for spec in &d.specs {
                walk_ref(v, NodeRef::Spec(spec));
            }
        }
        Decl::Func(d) => {
            group(v, d.doc.as_ref());
            opt_field_list(v, d.recv.as_ref());
            walk_ref(v, NodeRef::Ident(&d.name));
            walk_ref(v, NodeRef::FuncType(&d.ty));
            if let Some(body) = &d.body {
                walk_ref(v, NodeRef::Block(body));
            }
        }
    }
}

fn group<V: Visitor + ?Sized>(v: &mut V, group: Option<&CommentGroup>) {
    if let Some(group) = group {
        walk_ref(v, NodeRef::CommentGroup(group));
    }
}

fn idents<V: Visitor + ?Sized>(v: &mut V, idents: &[Ident]) {
    for ident in idents {
        walk_ref(v, NodeRef::Ident(ident));
    }
}

fn exprs<V: Visitor + ?Sized>(v: &mut V, exprs: &[Expr]) {
    for expr in exprs {
        walk_ref(v, NodeRef::Expr(expr));
    }
}

fn opt_expr<V: Visitor + ?Sized>(v: &mut V, expr: Option<&Expr>) {
    if let Some(expr) = expr {
        walk_ref(v, NodeRef::Expr(expr));
    }
}

fn stmts<V: Visitor + ?Sized>(v: &mut V, stmts: &[Stmt]) {
    for stmt in stmts {
        walk_ref(v, NodeRef::Stmt(stmt));
    }
}

fn opt_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: Option<&Stmt>) {
    if let Some(stmt) = stmt {
        walk_ref(v, NodeRef::Stmt(stmt));
    }
}

fn opt_field_list<V: Visitor + ?Sized>(v: &mut V, list: Option<&FieldList>) {
    if let Some(list) = list {
        walk_ref(v, NodeRef::FieldList(list));
    }
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Counts nodes by kind.
#[derive(Debug, Default)]
pub struct KindCounter {
    /// Count per kind; kinds never seen are absent.
    pub counts: BTreeMap<NodeKind, usize>,
}

impl KindCounter {
    /// Returns how many nodes of the given kind were seen.
    #[must_use]
    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the total number of nodes counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Visitor for KindCounter {
    fn enter(&mut self, node: NodeRef<'_>) -> bool {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        true
    }
}

/// Collects the text of every comment reachable through walked slots.
#[derive(Debug, Default)]
pub struct CommentCollector {
    /// Comment texts, in traversal order.
    pub texts: Vec<String>,
}

impl Visitor for CommentCollector {
    fn enter(&mut self, node: NodeRef<'_>) -> bool {
        if let NodeRef::Comment(comment) = node {
            self.texts.push(comment.text.clone());
        }
        true
    }
}

/// Computes the maximum depth of a tree.
#[derive(Debug, Default)]
pub struct DepthCalculator {
    current_depth: usize,
    /// Maximum depth encountered.
    pub max_depth: usize,
}

impl Visitor for DepthCalculator {
    fn enter(&mut self, _node: NodeRef<'_>) -> bool {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);
        true
    }

    fn leave(&mut self, _node: NodeRef<'_>) {
        self.current_depth -= 1;
    }
}
