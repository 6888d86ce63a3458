//! Integration tests for Layer 1: Rewrite
//!
//! Tests for the walker, cascading removal, annotation pruning, the engine,
//! and the walk laws.

mod annotations;
mod engine;
mod laws;
mod trees;
