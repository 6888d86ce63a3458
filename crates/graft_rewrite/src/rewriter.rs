//! The rewriter interface and a few ready-made rewriters.
//!
//! A [`Rewriter`] is called twice per node:
//! - [`Rewriter::enter`] before the node's children. It may edit or replace
//!   the node in place and returns a [`Visit`] saying what happens next.
//! - [`Rewriter::leave`] after every slot of the node was processed. It is
//!   not called for skipped, removed, or cascaded nodes.

use std::collections::HashMap;

use graft_ast::{Expr, Node};

/// What the walker does after [`Rewriter::enter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Walk the (possibly replaced) node's children.
    Descend,
    /// Keep the node as is and leave its children alone.
    Skip,
    /// Remove the node from its slot.
    Remove,
}

/// Trait for mutating tree rewriters.
pub trait Rewriter {
    /// Called before a node's children.
    ///
    /// Replacing the node is an assignment through `node`. The replacement
    /// must fit the slot it sits in; otherwise the walk fails with a kind
    /// mismatch.
    fn enter(&mut self, node: &mut Node) -> Visit;

    /// Called after all of a node's slots were processed without cascading.
    #[allow(unused_variables)]
    fn leave(&mut self, node: &Node) {}
}

impl<R: Rewriter + ?Sized> Rewriter for &mut R {
    fn enter(&mut self, node: &mut Node) -> Visit {
        (**self).enter(node)
    }

    fn leave(&mut self, node: &Node) {
        (**self).leave(node);
    }
}

/// Adapts a closure into a [`Rewriter`] with no `leave` step.
pub struct FnRewriter<F>(pub F);

impl<F> Rewriter for FnRewriter<F>
where
    F: FnMut(&mut Node) -> Visit,
{
    fn enter(&mut self, node: &mut Node) -> Visit {
        (self.0)(node)
    }
}

// =============================================================================
// Utility Rewriters
// =============================================================================

/// Removes every node matching a predicate.
pub struct RemoveWhere<P> {
    predicate: P,
    /// Number of nodes removed.
    pub removed: usize,
}

impl<P> RemoveWhere<P>
where
    P: FnMut(&Node) -> bool,
{
    /// Creates a rewriter removing nodes for which `predicate` holds.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            removed: 0,
        }
    }
}

impl<P> Rewriter for RemoveWhere<P>
where
    P: FnMut(&Node) -> bool,
{
    fn enter(&mut self, node: &mut Node) -> Visit {
        if (self.predicate)(node) {
            self.removed += 1;
            Visit::Remove
        } else {
            Visit::Descend
        }
    }
}

/// Renames identifiers.
///
/// Every identifier in the tree is considered, including declared names,
/// selectors, and labels.
#[derive(Debug, Default)]
pub struct IdentRenamer {
    renames: HashMap<String, String>,
    /// Number of identifiers renamed.
    pub renamed: usize,
}

impl IdentRenamer {
    /// Creates a renamer with no renames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to rename `from` to `to`.
    #[must_use]
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }
}

impl Rewriter for IdentRenamer {
    fn enter(&mut self, node: &mut Node) -> Visit {
        if let Node::Expr(Expr::Ident(ident)) = node {
            if let Some(to) = self.renames.get(&ident.name) {
                ident.name.clone_from(to);
                self.renamed += 1;
            }
        }
        Visit::Descend
    }
}

/// Removes every comment group.
///
/// Removed groups are emptied, so with file comment tidying on they also
/// disappear from `File::comments`.
#[derive(Debug, Default)]
pub struct StripComments {
    /// Number of groups removed.
    pub removed: usize,
}

impl Rewriter for StripComments {
    fn enter(&mut self, node: &mut Node) -> Visit {
        if matches!(node, Node::CommentGroup(_)) {
            self.removed += 1;
            Visit::Remove
        } else {
            Visit::Descend
        }
    }
}
