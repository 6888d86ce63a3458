//! The mutating walk.
//!
//! [`walk`] hands each node to a [`Rewriter`] in pre-order, processes the
//! node's slots in [`dispatch`](crate::dispatch) order, and applies the
//! outcome of every child to its slot:
//!
//! - a required child that is removed removes its owner (cascade), and the
//!   owner's remaining slots are not processed;
//! - an optional child that is removed clears the slot;
//! - list elements that are removed are dropped, survivors keep their order,
//!   and a removal-triggering list emptied by the walk cascades.
//!
//! Each subtree that leaves the tree has its comment groups emptied once it
//! is detached from its slot.
//!
//! A node the rewriter keeps must fit its slot. A misfit ends the walk
//! before anything below it is visited.
//!
//! # Example
//!
//! ```
//! use graft_ast::{Decl, Expr, GenDecl, Node, NodeKind, Spec, Token, ValueSpec};
//! use graft_rewrite::{Visit, rewrite};
//!
//! let decl = GenDecl::new(
//!     Token::Var,
//!     vec![
//!         Spec::from(ValueSpec::new(["a"], vec![Expr::int(1)])),
//!         Spec::from(ValueSpec::new(["b"], vec![Expr::int(2)])),
//!     ],
//! );
//!
//! // Removing every name empties each spec's names, which empties the specs.
//! let result = rewrite(Node::from(Decl::from(decl)), |node| {
//!     if node.kind() == NodeKind::Ident {
//!         Visit::Remove
//!     } else {
//!         Visit::Descend
//!     }
//! });
//! assert!(result.is_none());
//! ```

use std::mem;

use graft_ast::{
    CommentGroup, Decl, Expr, Field, FieldList, File, FuncType, Node, NodeKind, Spec, Stmt,
};

use crate::config::RewriteConfig;
use crate::dispatch::{self, Arity, Slot, SlotType};
use crate::error::{Error, Result};
use crate::prune::prune_annotations;
use crate::rewriter::{FnRewriter, Rewriter, Visit};
use crate::slot::SlotNode;
use crate::stats::WalkStats;
use crate::trace::{RemoveCause, Tracer, WalkEvent};

// =============================================================================
// Entry Points
// =============================================================================

/// Walks `root` with the default configuration.
///
/// Returns `None` if `root` is `None` or the root itself was removed.
///
/// # Panics
///
/// Panics if the rewriter leaves a node in a slot that cannot hold it.
/// Use [`try_walk`] to get the error instead.
#[must_use]
pub fn walk<R>(root: Option<Node>, rewriter: &mut R) -> Option<Node>
where
    R: Rewriter + ?Sized,
{
    Engine::default().walk(root, rewriter)
}

/// Walks `root` with the default configuration, reporting contract
/// violations as errors.
///
/// # Errors
///
/// Returns a kind mismatch error if the rewriter leaves a node in a slot
/// that cannot hold it. The partially rewritten tree is dropped.
pub fn try_walk<R>(root: Option<Node>, rewriter: &mut R) -> Result<Option<Node>>
where
    R: Rewriter + ?Sized,
{
    Engine::default().try_walk(root, rewriter)
}

/// Walks `root` with a closure as the rewriter.
///
/// # Panics
///
/// Panics on a kind mismatch, like [`walk`].
#[must_use]
pub fn rewrite<F>(root: Node, f: F) -> Option<Node>
where
    F: FnMut(&mut Node) -> Visit,
{
    walk(Some(root), &mut FnRewriter(f))
}

// =============================================================================
// Engine
// =============================================================================

/// A configured walker that keeps its tracer and the last walk's statistics.
#[derive(Debug, Default)]
pub struct Engine {
    config: RewriteConfig,
    tracer: Tracer,
    stats: WalkStats,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: RewriteConfig) -> Self {
        let tracer = Tracer::new(config.trace.clone());
        Self {
            config,
            tracer,
            stats: WalkStats::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the tracer for enabling, disabling, or clearing.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the statistics of the last walk.
    #[must_use]
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Walks `root`, panicking on a contract violation.
    ///
    /// # Panics
    ///
    /// Panics if the rewriter leaves a node in a slot that cannot hold it.
    #[must_use]
    pub fn walk<R>(&mut self, root: Option<Node>, rewriter: &mut R) -> Option<Node>
    where
        R: Rewriter + ?Sized,
    {
        match self.try_walk(root, rewriter) {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    /// Walks `root`, reporting contract violations as errors.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch error if the rewriter leaves a node in a slot
    /// that cannot hold it. The partially rewritten tree is dropped.
    pub fn try_walk<R>(&mut self, root: Option<Node>, rewriter: &mut R) -> Result<Option<Node>>
    where
        R: Rewriter + ?Sized,
    {
        self.stats = WalkStats::default();
        let Some(root) = root else {
            return Ok(None);
        };
        self.tracer.begin_walk();

        let mut walker = Walker {
            rewriter,
            config: &self.config,
            tracer: &mut self.tracer,
            stats: &mut self.stats,
            path: Vec::new(),
        };

        let result = walker.walk_node(root, None);
        match result {
            Ok(Walked::Kept(root)) => Ok(Some(root)),
            Ok(Walked::Removed(root)) => {
                walker.prune(&root);
                Ok(None)
            }
            Err(err) => {
                tracing::debug!(error = %err, "walk aborted");
                Err(err)
            }
        }
    }
}

// =============================================================================
// Walker
// =============================================================================

/// Outcome of walking one node.
enum Walked {
    Kept(Node),
    Removed(Node),
}

/// Why a node's slot processing stopped early.
enum Unwind {
    /// The node lost a required child or emptied a removal-triggering list.
    Cascade,
    /// A contract violation; the walk is over.
    Abort(Error),
}

impl From<Error> for Unwind {
    fn from(err: Error) -> Self {
        Self::Abort(err)
    }
}

type Slots = std::result::Result<(), Unwind>;

struct Walker<'a, R: ?Sized> {
    rewriter: &'a mut R,
    config: &'a RewriteConfig,
    tracer: &'a mut Tracer,
    stats: &'a mut WalkStats,
    /// Kinds from the root down to the node whose slots are being processed.
    path: Vec<NodeKind>,
}

impl<R: Rewriter + ?Sized> Walker<'_, R> {
    /// Walks one node held in `slot`; the root has no slot.
    fn walk_node(&mut self, mut node: Node, slot: Option<&Slot>) -> Result<Walked> {
        let depth = self.path.len();
        self.stats.visited += 1;
        self.tracer
            .record(depth, WalkEvent::Enter { kind: node.kind() });

        let visit = self.rewriter.enter(&mut node);
        if let Some(slot) = slot.filter(|_| visit != Visit::Remove) {
            self.fits(slot, node.kind())?;
        }

        match visit {
            Visit::Descend => {}
            Visit::Skip => {
                self.stats.skipped += 1;
                self.tracer
                    .record(depth, WalkEvent::Skip { kind: node.kind() });
                return Ok(Walked::Kept(node));
            }
            Visit::Remove => {
                self.stats.removed += 1;
                self.tracer.record(
                    depth,
                    WalkEvent::Remove {
                        kind: node.kind(),
                        cause: RemoveCause::Explicit,
                    },
                );
                return Ok(Walked::Removed(node));
            }
        }

        let kind = node.kind();
        self.path.push(kind);
        let outcome = self.children(&mut node);
        self.path.pop();

        match outcome {
            Ok(()) => {
                self.rewriter.leave(&node);
                self.tracer.record(depth, WalkEvent::Leave { kind });
                Ok(Walked::Kept(node))
            }
            Err(Unwind::Cascade) => {
                self.stats.cascaded += 1;
                tracing::debug!(kind = %kind, depth, "cascade removal");
                self.tracer.record(
                    depth,
                    WalkEvent::Remove {
                        kind,
                        cause: RemoveCause::Cascade,
                    },
                );
                Ok(Walked::Removed(node))
            }
            Err(Unwind::Abort(err)) => Err(err),
        }
    }

    fn prune(&mut self, node: &Node) {
        let groups = prune_annotations(node.view());
        if groups > 0 {
            self.stats.pruned += groups;
            self.tracer.record(
                self.path.len(),
                WalkEvent::Prune {
                    kind: node.kind(),
                    groups,
                },
            );
        }
    }

    fn fits(&self, slot: &Slot, kind: NodeKind) -> Result<()> {
        if slot.ty.accepts(kind) {
            Ok(())
        } else {
            Err(Error::kind_mismatch(slot, kind, &self.path))
        }
    }

    fn convert<T: SlotNode>(&self, slot: &Slot, node: Node) -> Result<T> {
        T::from_node(node).map_err(|found| Error::kind_mismatch(slot, found.kind(), &self.path))
    }

    fn check(&self, slot: &Slot, arity: fn(Arity) -> bool, ty: SlotType) {
        debug_assert!(arity(slot.arity), "{slot} used with the wrong arity");
        debug_assert_eq!(slot.ty, ty, "{slot} holds the wrong type");
        debug_assert_eq!(self.path.last(), Some(&slot.owner), "{slot} used off its owner");
        debug_assert!(
            dispatch::slots(slot.owner).contains(slot),
            "{slot} missing from the slot table"
        );
    }

    // -------------------------------------------------------------------------
    // Slot kinds
    // -------------------------------------------------------------------------

    /// A required child: removal cascades to the owner.
    fn one<T: SlotNode + Default>(&mut self, slot: &Slot, child: &mut T) -> Slots {
        self.check(slot, |a| a == Arity::Required, T::SLOT);

        let taken = mem::take(child).into_node();
        match self.walk_node(taken, Some(slot))? {
            Walked::Kept(node) => {
                *child = self.convert(slot, node)?;
                Ok(())
            }
            Walked::Removed(node) => {
                // Put the child back so the owner is pruned as one subtree.
                match T::from_node(node) {
                    Ok(node) => *child = node,
                    Err(stray) => self.prune(&stray),
                }
                Err(Unwind::Cascade)
            }
        }
    }

    /// An optional child: removal clears the slot.
    fn maybe<T: SlotNode>(&mut self, slot: &Slot, child: &mut Option<T>) -> Slots {
        self.check(slot, |a| a == Arity::Optional, T::SLOT);

        let Some(taken) = child.take() else {
            return Ok(());
        };
        match self.walk_node(taken.into_node(), Some(slot))? {
            Walked::Kept(node) => *child = Some(self.convert(slot, node)?),
            Walked::Removed(node) => {
                self.stats.cleared += 1;
                self.tracer.record(
                    self.path.len(),
                    WalkEvent::Clear {
                        owner: slot.owner,
                        slot: slot.name,
                    },
                );
                self.prune(&node);
            }
        }
        Ok(())
    }

    /// A list: removed elements are dropped, survivors keep their order.
    fn many<T: SlotNode>(&mut self, slot: &Slot, list: &mut Vec<T>) -> Slots {
        self.check(slot, |a| matches!(a, Arity::List(_)), T::SLOT);

        let before = list.len();
        let mut kept = Vec::with_capacity(before);
        for element in mem::take(list) {
            match self.walk_node(element.into_node(), Some(slot))? {
                Walked::Kept(node) => kept.push(self.convert(slot, node)?),
                Walked::Removed(node) => {
                    self.stats.dropped += 1;
                    self.prune(&node);
                }
            }
        }
        *list = kept;

        if slot.cascades_when_emptied() && before > 0 && list.is_empty() {
            return Err(Unwind::Cascade);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    fn children(&mut self, node: &mut Node) -> Slots {
        match node {
            Node::Comment(_) => Ok(()),
            Node::CommentGroup(group) => self.comment_group(group),
            Node::Field(field) => self.field(field),
            Node::FieldList(list) => self.field_list(list),
            Node::Expr(expr) => self.expr(expr),
            Node::Stmt(stmt) => self.stmt(stmt),
            Node::Spec(spec) => self.spec(spec),
            Node::Decl(decl) => self.decl(decl),
            Node::File(file) => self.file(file),
            Node::Package(package) => {
                let [files] = &dispatch::PACKAGE;
                self.many(files, &mut package.files)
            }
        }
    }

    fn comment_group(&mut self, group: &CommentGroup) -> Slots {
        let [list] = &dispatch::COMMENT_GROUP;
        let original = group.take();
        let mut comments = original.clone();
        let outcome = self.many(list, &mut comments);
        // An aborted walk leaves the shared group as it found it.
        if matches!(outcome, Err(Unwind::Abort(_))) {
            group.replace(original);
        } else {
            group.replace(comments);
        }
        outcome
    }

    fn field(&mut self, field: &mut Field) -> Slots {
        let [doc, names, ty, tag, comment] = &dispatch::FIELD;
        self.maybe(doc, &mut field.doc)?;
        self.many(names, &mut field.names)?;
        self.one(ty, &mut field.ty)?;
        self.maybe(tag, &mut field.tag)?;
        self.maybe(comment, &mut field.comment)
    }

    fn field_list(&mut self, list: &mut FieldList) -> Slots {
        let [fields] = &dispatch::FIELD_LIST;
        self.many(fields, &mut list.list)
    }

    fn func_type(&mut self, ty: &mut FuncType) -> Slots {
        let [params, results] = &dispatch::FUNC_TYPE_SLOTS;
        self.maybe(params, &mut ty.params)?;
        self.maybe(results, &mut ty.results)
    }

    fn expr(&mut self, expr: &mut Expr) -> Slots {
        use dispatch as d;

        match expr {
            Expr::Bad | Expr::Ident(_) | Expr::BasicLit(_) => Ok(()),
            Expr::Ellipsis(e) => {
                let [elt] = &d::ELLIPSIS;
                self.maybe(elt, &mut e.elt)
            }
            Expr::FuncLit(e) => {
                let [ty, body] = &d::FUNC_LIT;
                self.one(ty, &mut e.ty)?;
                self.one(body, &mut e.body)
            }
            Expr::CompositeLit(e) => {
                let [ty, elts] = &d::COMPOSITE_LIT;
                self.maybe(ty, &mut e.ty)?;
                self.many(elts, &mut e.elts)
            }
            Expr::Paren(e) => {
                let [x] = &d::PAREN_EXPR;
                self.one(x, &mut e.x)
            }
            Expr::Selector(e) => {
                let [x, sel] = &d::SELECTOR_EXPR;
                self.one(x, &mut e.x)?;
                self.one(sel, &mut e.sel)
            }
            Expr::Index(e) => {
                let [x, index] = &d::INDEX_EXPR;
                self.one(x, &mut e.x)?;
                self.one(index, &mut e.index)
            }
            Expr::Slice(e) => {
                let [x, low, high, max] = &d::SLICE_EXPR;
                self.one(x, &mut e.x)?;
                self.maybe(low, &mut e.low)?;
                self.maybe(high, &mut e.high)?;
                self.maybe(max, &mut e.max)
            }
            Expr::TypeAssert(e) => {
                let [x, ty] = &d::TYPE_ASSERT_EXPR;
                self.one(x, &mut e.x)?;
                self.maybe(ty, &mut e.ty)
            }
            Expr::Call(e) => {
                let [fun, args] = &d::CALL_EXPR;
                self.one(fun, &mut e.fun)?;
                self.many(args, &mut e.args)
            }
            Expr::Star(e) => {
                let [x] = &d::STAR_EXPR;
                self.one(x, &mut e.x)
            }
            Expr::Unary(e) => {
                let [x] = &d::UNARY_EXPR;
                self.one(x, &mut e.x)
            }
            Expr::Binary(e) => {
                let [x, y] = &d::BINARY_EXPR;
                self.one(x, &mut e.x)?;
                self.one(y, &mut e.y)
            }
            Expr::KeyValue(e) => {
                let [key, value] = &d::KEY_VALUE_EXPR;
                self.one(key, &mut e.key)?;
                self.one(value, &mut e.value)
            }
            Expr::ArrayType(e) => {
                let [len, elt] = &d::ARRAY_TYPE;
                self.maybe(len, &mut e.len)?;
                self.one(elt, &mut e.elt)
            }
            Expr::StructType(e) => {
                let [fields] = &d::STRUCT_TYPE;
                self.one(fields, &mut e.fields)
            }
            Expr::FuncType(e) => self.func_type(e),
            Expr::InterfaceType(e) => {
                let [methods] = &d::INTERFACE_TYPE;
                self.maybe(methods, &mut e.methods)
            }
            Expr::MapType(e) => {
                let [key, value] = &d::MAP_TYPE;
                self.one(key, &mut e.key)?;
                self.one(value, &mut e.value)
            }
            Expr::ChanType(e) => {
                let [value] = &d::CHAN_TYPE;
                self.one(value, &mut e.value)
            }
        }
    }

    fn stmt(&mut self, stmt: &mut Stmt) -> Slots {
        use dispatch as d;

        match stmt {
            Stmt::Bad | Stmt::Empty => Ok(()),
            Stmt::Decl(s) => {
                let [decl] = &d::DECL_STMT;
                self.one(decl, &mut s.decl)
            }
            Stmt::Labeled(s) => {
                let [label, inner] = &d::LABELED_STMT;
                self.one(label, &mut s.label)?;
                self.one(inner, &mut s.stmt)
            }
            Stmt::Expr(s) => {
                let [x] = &d::EXPR_STMT;
                self.one(x, &mut s.x)
            }
            Stmt::Send(s) => {
                let [chan, value] = &d::SEND_STMT;
                self.one(chan, &mut s.chan)?;
                self.one(value, &mut s.value)
            }
            Stmt::IncDec(s) => {
                let [x] = &d::INC_DEC_STMT;
                self.one(x, &mut s.x)
            }
            Stmt::Assign(s) => {
                let [lhs, rhs] = &d::ASSIGN_STMT;
                self.many(lhs, &mut s.lhs)?;
                self.many(rhs, &mut s.rhs)
            }
            Stmt::Go(s) => {
                let [call] = &d::GO_STMT;
                self.one(call, &mut s.call)
            }
            Stmt::Defer(s) => {
                let [call] = &d::DEFER_STMT;
                self.one(call, &mut s.call)
            }
            Stmt::Return(s) => {
                let [results] = &d::RETURN_STMT;
                self.many(results, &mut s.results)
            }
            Stmt::Branch(s) => {
                let [label] = &d::BRANCH_STMT;
                self.maybe(label, &mut s.label)
            }
            Stmt::Block(s) => {
                let [list] = &d::BLOCK_STMT;
                self.many(list, &mut s.list)
            }
            Stmt::If(s) => {
                let [init, cond, body, else_branch] = &d::IF_STMT;
                self.maybe(init, &mut s.init)?;
                self.one(cond, &mut s.cond)?;
                self.one(body, &mut s.body)?;
                self.maybe(else_branch, &mut s.else_branch)
            }
            Stmt::CaseClause(s) => {
                let [list, body] = &d::CASE_CLAUSE;
                self.many(list, &mut s.list)?;
                self.many(body, &mut s.body)
            }
            Stmt::Switch(s) => {
                let [init, tag, body] = &d::SWITCH_STMT;
                self.maybe(init, &mut s.init)?;
                self.maybe(tag, &mut s.tag)?;
                self.one(body, &mut s.body)
            }
            Stmt::TypeSwitch(s) => {
                let [init, assign, body] = &d::TYPE_SWITCH_STMT;
                self.maybe(init, &mut s.init)?;
                self.one(assign, &mut s.assign)?;
                self.one(body, &mut s.body)
            }
            Stmt::CommClause(s) => {
                let [comm, body] = &d::COMM_CLAUSE;
                self.maybe(comm, &mut s.comm)?;
                self.many(body, &mut s.body)
            }
            Stmt::Select(s) => {
                let [body] = &d::SELECT_STMT;
                self.one(body, &mut s.body)
            }
            Stmt::For(s) => {
                let [init, cond, post, body] = &d::FOR_STMT;
                self.maybe(init, &mut s.init)?;
                self.maybe(cond, &mut s.cond)?;
                self.maybe(post, &mut s.post)?;
                self.one(body, &mut s.body)
            }
            Stmt::Range(s) => {
                let [key, value, x, body] = &d::RANGE_STMT;
                self.maybe(key, &mut s.key)?;
                self.maybe(value, &mut s.value)?;
                self.one(x, &mut s.x)?;
                self.one(body, &mut s.body)
            }
        }
    }

    fn spec(&mut self, spec: &mut Spec) -> Slots {
        use dispatch as d;

        match spec {
            Spec::Import(s) => {
                let [doc, name, path, comment] = &d::IMPORT_SPEC;
                self.maybe(doc, &mut s.doc)?;
                self.maybe(name, &mut s.name)?;
                self.one(path, &mut s.path)?;
                self.maybe(comment, &mut s.comment)
            }
            Spec::Value(s) => {
                let [doc, names, ty, values, comment] = &d::VALUE_SPEC;
                self.maybe(doc, &mut s.doc)?;
                self.many(names, &mut s.names)?;
                self.maybe(ty, &mut s.ty)?;
                self.many(values, &mut s.values)?;
                self.maybe(comment, &mut s.comment)
            }
            Spec::Type(s) => {
                let [doc, name, ty, comment] = &d::TYPE_SPEC;
                self.maybe(doc, &mut s.doc)?;
                self.one(name, &mut s.name)?;
                self.one(ty, &mut s.ty)?;
                self.maybe(comment, &mut s.comment)
            }
        }
    }

    fn decl(&mut self, decl: &mut Decl) -> Slots {
        use dispatch as d;

        match decl {
            Decl::Bad => Ok(()),
            Decl::Gen(g) => {
                let [doc, specs] = &d::GEN_DECL;
                self.maybe(doc, &mut g.doc)?;
                self.many(specs, &mut g.specs)
            }
            Decl::Func(f) => {
                let [doc, recv, name, ty, body] = &d::FUNC_DECL;
                self.maybe(doc, &mut f.doc)?;
                self.maybe(recv, &mut f.recv)?;
                self.one(name, &mut f.name)?;
                self.one(ty, &mut f.ty)?;
                self.maybe(body, &mut f.body)
            }
        }
    }

    fn file(&mut self, file: &mut File) -> Slots {
        let [doc, name, decls] = &dispatch::FILE;
        self.maybe(doc, &mut file.doc)?;
        self.one(name, &mut file.name)?;
        self.many(decls, &mut file.decls)?;

        if self.config.tidy_file_comments {
            let before = file.comments.len();
            file.comments.retain(|group| !group.is_empty());
            let dropped = before - file.comments.len();
            if dropped > 0 {
                self.stats.tidied += dropped;
                self.tracer
                    .record(self.path.len(), WalkEvent::Tidy { dropped });
            }
        }
        Ok(())
    }
}
