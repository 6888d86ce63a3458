//! Graft - Mutating rewrites for Go-style syntax trees
//!
//! This crate re-exports both layers of graft for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: graft_rewrite - Slot dispatch, walker, cascading removal, pruning
//! Layer 0: graft_ast     - Node types, comment groups, read-only traversal
//! ```

pub use graft_ast as ast;
pub use graft_rewrite as rewrite;
