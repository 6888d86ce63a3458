//! Compact S-expression rendering of trees.
//!
//! Each node renders as `(Kind detail children...)`. Identifiers carry their
//! name, literals their source text, comments their quoted text, and operator
//! nodes their token:
//!
//! ```
//! use graft_ast::{Expr, Node, Token, outline};
//!
//! let sum = Node::from(Expr::binary(Expr::ident("a"), Token::Add, Expr::int(1)));
//! assert_eq!(outline(sum.view()), "(BinaryExpr + (Ident a) (BasicLit 1))");
//! ```

use std::fmt::Write;

use crate::decl::Decl;
use crate::expr::Expr;
use crate::stmt::Stmt;
use crate::visit::{NodeRef, Visitor, walk_ref};

/// Renders a node and everything reachable from it.
#[must_use]
pub fn outline(node: NodeRef<'_>) -> String {
    let mut outliner = Outliner::default();
    walk_ref(&mut outliner, node);
    outliner.out
}

#[derive(Default)]
struct Outliner {
    out: String,
}

impl Visitor for Outliner {
    fn enter(&mut self, node: NodeRef<'_>) -> bool {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push('(');
        push_label(&mut self.out, node);
        true
    }

    fn leave(&mut self, _node: NodeRef<'_>) {
        self.out.push(')');
    }
}

fn push_label(out: &mut String, node: NodeRef<'_>) {
    let kind = node.kind();
    // Writing into a String cannot fail.
    let _ = match node {
        NodeRef::Comment(c) => write!(out, "{kind} {:?}", c.text),
        NodeRef::Ident(i) | NodeRef::Expr(Expr::Ident(i)) => write!(out, "{kind} {}", i.name),
        NodeRef::BasicLit(l) | NodeRef::Expr(Expr::BasicLit(l)) => {
            write!(out, "{kind} {}", l.value)
        }
        NodeRef::Expr(Expr::Unary(e)) => write!(out, "{kind} {}", e.op),
        NodeRef::Expr(Expr::Binary(e)) => write!(out, "{kind} {}", e.op),
        NodeRef::Stmt(Stmt::IncDec(s)) => write!(out, "{kind} {}", s.tok),
        NodeRef::Stmt(Stmt::Assign(s)) => write!(out, "{kind} {}", s.tok),
        NodeRef::Stmt(Stmt::Branch(s)) => write!(out, "{kind} {}", s.tok),
        NodeRef::Decl(Decl::Gen(d)) => write!(out, "{kind} {}", d.tok),
        _ => write!(out, "{kind}"),
    };
}
