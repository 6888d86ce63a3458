//! Counters for a single walk.

use std::fmt;

/// What the last walk did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Nodes handed to the rewriter.
    pub visited: usize,
    /// Nodes kept without descending.
    pub skipped: usize,
    /// Nodes the rewriter removed.
    pub removed: usize,
    /// Nodes removed because a required child or triggering list was lost.
    pub cascaded: usize,
    /// Optional slots cleared.
    pub cleared: usize,
    /// List elements dropped.
    pub dropped: usize,
    /// Comment groups emptied by pruning.
    pub pruned: usize,
    /// Emptied groups dropped from file comment lists.
    pub tidied: usize,
}

impl WalkStats {
    /// Nodes removed for any reason.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.removed + self.cascaded
    }

    /// Returns true if the walk changed nothing structurally.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.total_removed() == 0 && self.pruned == 0 && self.tidied == 0
    }
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} visited, {} skipped, {} removed ({} cascaded), {} cleared, {} dropped, {} pruned",
            self.visited,
            self.skipped,
            self.total_removed(),
            self.cascaded,
            self.cleared,
            self.dropped,
            self.pruned
        )
    }
}
