//! Annotation pruning for discarded subtrees.
//!
//! A removed node may carry comment groups that are also listed in
//! `File::comments`. Pruning empties every such group reachable from the
//! removed subtree, so the shared handle is empty wherever it is still held.
//! The walk never calls the rewriter and never looks inside a group.

use graft_ast::{NodeRef, inspect};

/// Empties every comment group attached within `node`.
///
/// Returns the number of groups that held comments.
pub fn prune_annotations(node: NodeRef<'_>) -> usize {
    let mut pruned = 0;
    inspect(node, |node| match node {
        NodeRef::CommentGroup(group) => {
            if !group.is_empty() {
                group.clear();
                pruned += 1;
            }
            false
        }
        _ => true,
    });
    pruned
}
