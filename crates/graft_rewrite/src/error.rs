//! Error types for rewriting.
//!
//! Uses `thiserror`. Removal and replacement are normal outcomes of a walk;
//! the only error is a rewriter breaking the slot contract.

use graft_ast::NodeKind;
use thiserror::Error;

use crate::dispatch::{Slot, SlotType};

/// Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A contract violation that aborted a walk.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {}", render_path(.path))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Kinds from the root down to the node owning the offending slot.
    pub path: Vec<NodeKind>,
}

impl Error {
    /// Creates a new error with the given kind and location.
    #[must_use]
    pub fn new(kind: ErrorKind, path: Vec<NodeKind>) -> Self {
        Self { kind, path }
    }

    /// Creates a kind mismatch error for a node of kind `found` left in `slot`.
    #[must_use]
    pub fn kind_mismatch(slot: &Slot, found: NodeKind, path: &[NodeKind]) -> Self {
        Self::new(
            ErrorKind::KindMismatch {
                owner: slot.owner,
                slot: slot.name,
                expected: slot.ty,
                found,
            },
            path.to_vec(),
        )
    }

    /// Returns the kind of the node owning the offending slot.
    #[must_use]
    pub fn owner(&self) -> NodeKind {
        match self.kind {
            ErrorKind::KindMismatch { owner, .. } => owner,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A rewriter put a node of the wrong family or kind into a slot.
    #[error("kind mismatch: {owner}.{slot} holds {expected}, got {found}")]
    KindMismatch {
        /// Kind of the node owning the slot.
        owner: NodeKind,
        /// Slot name.
        slot: &'static str,
        /// What the slot accepts.
        expected: SlotType,
        /// Kind that was found.
        found: NodeKind,
    },
}

fn render_path(path: &[NodeKind]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(" > ")
}
