//! Mutating rewrites over graft syntax trees.
//!
//! This crate provides:
//! - [`walk`], [`try_walk`], and [`rewrite`] - Pre-order walks that let a
//!   [`Rewriter`] edit, replace, skip, or remove each node
//! - [`dispatch`] - The ordered child slots of every node kind
//! - [`Engine`] - A configured walker with tracing and [`WalkStats`]
//! - [`prune_annotations`] - Emptying the comment groups of a discarded subtree
//!
//! Removal propagates by slot kind. A removed required child removes its
//! owner, a removed optional child clears its slot, and a removed list
//! element is dropped. Lists such as `GenDecl.specs` remove their owner when
//! the walk empties them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod prune;
pub mod rewriter;
pub mod slot;
pub mod stats;
pub mod trace;
pub mod walker;

pub use config::RewriteConfig;
pub use dispatch::{Arity, Empty, Slot, SlotType, slots};
pub use error::{Error, ErrorKind, Result};
pub use prune::prune_annotations;
pub use rewriter::{FnRewriter, IdentRenamer, RemoveWhere, Rewriter, StripComments, Visit};
pub use slot::SlotNode;
pub use stats::WalkStats;
pub use trace::{TraceOutput, Tracer, TracerConfig};
pub use walker::{Engine, rewrite, try_walk, walk};
