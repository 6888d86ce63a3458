//! Trace event and record types.
//!
//! This module defines the events the walker reports while rewriting.

use std::fmt;

use graft_ast::NodeKind;

// =============================================================================
// Remove Cause
// =============================================================================

/// Why a node left the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveCause {
    /// The rewriter asked for removal.
    Explicit,
    /// A required child or removal-triggering list was lost.
    Cascade,
}

impl fmt::Display for RemoveCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Cascade => write!(f, "cascade"),
        }
    }
}

// =============================================================================
// Walk Event
// =============================================================================

/// Events that can be traced during a walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkEvent {
    /// The rewriter was called on a node.
    Enter {
        /// Kind before the rewriter ran.
        kind: NodeKind,
    },

    /// The rewriter kept a node without descending.
    Skip {
        /// The skipped node.
        kind: NodeKind,
    },

    /// All slots of a node were processed.
    Leave {
        /// The finished node.
        kind: NodeKind,
    },

    /// A node was removed.
    Remove {
        /// The removed node.
        kind: NodeKind,
        /// Why it was removed.
        cause: RemoveCause,
    },

    /// An optional slot lost its child.
    Clear {
        /// Kind of the slot owner.
        owner: NodeKind,
        /// Slot name.
        slot: &'static str,
    },

    /// Comment groups of a discarded subtree were emptied.
    Prune {
        /// Root of the discarded subtree.
        kind: NodeKind,
        /// Number of groups emptied.
        groups: usize,
    },

    /// Emptied groups were dropped from a file's comment list.
    Tidy {
        /// Number of groups dropped.
        dropped: usize,
    },
}

impl WalkEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Enter { .. } => "enter",
            Self::Skip { .. } => "skip",
            Self::Leave { .. } => "leave",
            Self::Remove { .. } => "remove",
            Self::Clear { .. } => "clear",
            Self::Prune { .. } => "prune",
            Self::Tidy { .. } => "tidy",
        }
    }

    /// Returns true if this event changed the tree.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::Enter { .. } | Self::Skip { .. } | Self::Leave { .. }
        )
    }
}

impl fmt::Display for WalkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter { kind } => write!(f, "enter {kind}"),
            Self::Skip { kind } => write!(f, "skip {kind}"),
            Self::Leave { kind } => write!(f, "leave {kind}"),
            Self::Remove { kind, cause } => write!(f, "remove {kind} ({cause})"),
            Self::Clear { owner, slot } => write!(f, "clear {owner}.{slot}"),
            Self::Prune { kind, groups } => write!(f, "prune {groups} group(s) under {kind}"),
            Self::Tidy { dropped } => write!(f, "tidy {dropped} file comment group(s)"),
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A numbered trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the tracer.
    pub id: u64,
    /// The walk this event belongs to.
    pub walk: u64,
    /// Depth of the node in the tree; the root is 0.
    pub depth: usize,
    /// The trace event.
    pub event: WalkEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, walk: u64, depth: usize, event: WalkEvent) -> Self {
        Self {
            id,
            walk,
            depth,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W{:04} [{:06}] {:indent$}{}",
            self.walk,
            self.id,
            "",
            self.event,
            indent = self.depth * 2
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
