//! Integration tests for Layer 0: AST
//!
//! Tests for the node taxonomy, comment group handles, read-only traversal,
//! and outline rendering.

mod comments;
mod taxonomy;
