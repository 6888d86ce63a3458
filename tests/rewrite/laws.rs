//! Property tests for the walk laws
//!
//! Identity, early stop, order preservation, cascade, and orphaned annotations,
//! checked over generated files.

use graft::ast::{
    Decl, KindCounter, Node, NodeKind, NodeRef, Spec, Stmt, inspect, outline, walk_ref,
};
use graft::rewrite::{Engine, FnRewriter, Visit, walk};
use proptest::collection::vec;
use proptest::prelude::*;

use crate::trees::{count_until, file, groups_in, remove_kind, removable_kind};

/// Kinds in walk order, stopping below `stop`.
fn kinds_until(node: &Node, stop: NodeKind) -> Vec<NodeKind> {
    let mut kinds = Vec::new();
    inspect(node.view(), |node| {
        kinds.push(node.kind());
        node.kind() != stop
    });
    kinds
}

/// Returns false if any removal-triggering list in the tree is empty.
fn triggering_lists_filled(node: &Node) -> bool {
    let mut filled = true;
    inspect(node.view(), |node| {
        match node {
            NodeRef::Stmt(Stmt::Assign(s)) => filled &= !s.lhs.is_empty() && !s.rhs.is_empty(),
            NodeRef::Spec(Spec::Value(s)) => filled &= !s.names.is_empty(),
            NodeRef::Decl(Decl::Gen(d)) => filled &= !d.specs.is_empty(),
            NodeRef::CommentGroup(g) => filled &= !g.is_empty(),
            _ => {}
        }
        true
    });
    filled
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Descending everywhere without edits returns the same tree.
    #[test]
    fn identity_walk_changes_nothing(file in file()) {
        let node = Node::from(file);
        let expected = node.clone();
        let total = count_until(&node, None);

        let mut engine = Engine::default();
        let mut rewriter = FnRewriter(|_: &mut Node| Visit::Descend);
        let result = engine.walk(Some(node), &mut rewriter);

        prop_assert_eq!(result.as_ref(), Some(&expected));
        prop_assert_eq!(engine.stats().visited, total);
        prop_assert!(engine.stats().is_unchanged());
    }

    /// Skipping a node hides its descendants and nothing else.
    #[test]
    fn skip_stops_only_below_the_node(file in file(), kind in removable_kind()) {
        let node = Node::from(file);
        let expected = node.clone();
        let expected_kinds = kinds_until(&node, kind);

        let mut seen = Vec::new();
        let result = walk(
            Some(node),
            &mut FnRewriter(|node: &mut Node| {
                seen.push(node.kind());
                if node.kind() == kind { Visit::Skip } else { Visit::Descend }
            }),
        );

        prop_assert_eq!(seen, expected_kinds);
        prop_assert_eq!(result, Some(expected));
    }

    /// Removing declarations keeps the rest in their original order.
    #[test]
    fn survivors_keep_order(file in file(), mask in vec(any::<bool>(), 5)) {
        let before: Vec<String> = file.decls.iter().map(|d| outline(NodeRef::Decl(d))).collect();

        let mut index = 0;
        let result = walk(
            Some(Node::from(file)),
            &mut FnRewriter(|node: &mut Node| {
                if matches!(node, Node::Decl(_)) {
                    let drop = mask[index];
                    index += 1;
                    if drop {
                        return Visit::Remove;
                    }
                }
                Visit::Descend
            }),
        );

        let file = result.unwrap().into_file().unwrap();
        let after: Vec<String> = file.decls.iter().map(|d| outline(NodeRef::Decl(d))).collect();
        let expected: Vec<String> = before
            .into_iter()
            .zip(&mask)
            .filter(|(_, drop)| !**drop)
            .map(|(outline, _)| outline)
            .collect();
        prop_assert_eq!(after, expected);
    }

    /// Removing every node of a kind leaves none behind, never leaves a
    /// removal-triggering list empty, and stops at the file unless the
    /// file's own name was removed.
    #[test]
    fn removal_cascades_to_the_first_tolerant_slot(file in file(), kind in removable_kind()) {
        let result = walk(Some(Node::from(file)), &mut FnRewriter(remove_kind(kind)));

        if kind == NodeKind::Ident {
            prop_assert!(result.is_none());
            return Ok(());
        }
        let node = result.unwrap();

        let mut counter = KindCounter::default();
        walk_ref(&mut counter, node.view());
        prop_assert_eq!(counter.count(kind), 0);
        prop_assert!(triggering_lists_filled(&node));
    }

    /// No comment group of a removed subtree keeps its comments, and every
    /// surviving group is still attached and listed on the file.
    #[test]
    fn removed_annotations_are_orphaned(file in file(), kind in removable_kind()) {
        let groups = file.comments.clone();

        let mut engine = Engine::default();
        let result = engine.walk(Some(Node::from(file)), &mut FnRewriter(remove_kind(kind)));

        let attached = result.as_ref().map(|n| groups_in(n.view())).unwrap_or_default();
        for group in &groups {
            let still_attached = attached.iter().any(|g| g.same_group(group));
            prop_assert_eq!(still_attached, !group.is_empty());
        }

        if let Some(node) = result {
            let file = node.into_file().unwrap();
            prop_assert_eq!(file.comments.len(), attached.len());
            for (listed, group) in file.comments.iter().zip(&attached) {
                prop_assert!(listed.same_group(group));
            }
        }
    }
}

