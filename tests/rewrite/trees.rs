//! Tree builders and proptest strategies shared by the rewrite tests.

use graft::ast::{
    BlockStmt, Comment, CommentGroup, Decl, Expr, File, FuncDecl, GenDecl, IfStmt, Node, NodeKind,
    NodeRef, Spec, Stmt, Token, ValueSpec, inspect,
};
use graft::rewrite::Visit;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

// =============================================================================
// Builders
// =============================================================================

/// `var name = value`
pub fn var(name: &str, value: i64) -> Spec {
    ValueSpec::new([name], vec![Expr::int(value)]).into()
}

/// Wraps a spec list in a `var` declaration.
pub fn var_decl(specs: Vec<Spec>) -> Decl {
    GenDecl::new(Token::Var, specs).into()
}

/// Builds a file whose comment list holds every group reachable from `decls`.
pub fn file_with_comments(decls: Vec<Decl>) -> File {
    let mut file = File::new("main", decls);
    file.comments = groups_in(NodeRef::File(&file));
    file
}

/// Every comment group reachable from `node`, in walk order.
pub fn groups_in(node: NodeRef<'_>) -> Vec<CommentGroup> {
    let mut groups = Vec::new();
    inspect(node, |node| {
        if let NodeRef::CommentGroup(group) = node {
            groups.push(group.clone());
        }
        true
    });
    groups
}

/// Counts the nodes a walk would visit if it stopped at `stop`.
pub fn count_until(node: &Node, stop: Option<NodeKind>) -> usize {
    let mut count = 0;
    inspect(node.view(), |node| {
        count += 1;
        Some(node.kind()) != stop
    });
    count
}

/// A closure rewriter that removes every node of `kind`.
pub fn remove_kind(kind: NodeKind) -> impl FnMut(&mut Node) -> Visit {
    move |node| {
        if node.kind() == kind {
            Visit::Remove
        } else {
            Visit::Descend
        }
    }
}

// =============================================================================
// Strategies
// =============================================================================

fn name() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn doc() -> impl Strategy<Value = Option<CommentGroup>> {
    option::of(vec("[a-z ]{1,12}", 1..3)).prop_map(|lines| {
        let lines = lines?;
        Some(CommentGroup::new(
            lines.into_iter().map(|l| Comment::new(format!("// {l}"))),
        ))
    })
}

pub fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        name().prop_map(|n| Expr::ident(n)),
        (0i64..100).prop_map(Expr::int),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(x, y)| Expr::binary(x, Token::Add, y)),
            inner.clone().prop_map(Expr::paren),
            inner.clone().prop_map(|x| Expr::unary(Token::Sub, x)),
            (name(), vec(inner, 0..3)).prop_map(|(f, args)| Expr::call(Expr::ident(f), args)),
        ]
    })
}

pub fn stmt() -> impl Strategy<Value = Stmt> {
    let simple = prop_oneof![
        expr().prop_map(Stmt::expr),
        (vec(expr(), 1..3), vec(expr(), 1..3))
            .prop_map(|(lhs, rhs)| Stmt::assign(lhs, Token::Assign, rhs)),
        vec(expr(), 0..3).prop_map(Stmt::ret),
    ];
    simple.prop_recursive(2, 16, 3, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..3).prop_map(Stmt::block),
            (expr(), vec(inner.clone(), 0..3), option::of(vec(inner, 0..2))).prop_map(
                |(cond, body, else_body)| {
                    Stmt::from(IfStmt {
                        init: None,
                        cond,
                        body: BlockStmt::new(body),
                        else_branch: else_body.map(Stmt::block),
                    })
                }
            ),
        ]
    })
}

fn value_spec() -> impl Strategy<Value = Spec> {
    (vec(name(), 1..3), vec(expr(), 0..3), doc()).prop_map(|(names, values, doc)| {
        let mut spec = ValueSpec::new(names.iter().map(String::as_str), values);
        spec.doc = doc;
        Spec::from(spec)
    })
}

fn gen_decl() -> impl Strategy<Value = Decl> {
    (vec(value_spec(), 1..3), doc()).prop_map(|(specs, doc)| {
        let mut decl = GenDecl::new(Token::Var, specs);
        decl.doc = doc;
        Decl::from(decl)
    })
}

fn func_decl() -> impl Strategy<Value = Decl> {
    (name(), vec(stmt(), 0..4), doc()).prop_map(|(name, body, doc)| {
        let mut decl = FuncDecl::new(name, BlockStmt::new(body));
        decl.doc = doc;
        Decl::from(decl)
    })
}

/// A file of documented `var` and `func` declarations.
pub fn file() -> impl Strategy<Value = File> {
    vec(prop_oneof![gen_decl(), func_decl()], 0..5).prop_map(file_with_comments)
}

/// Kinds worth removing in property tests.
pub fn removable_kind() -> impl Strategy<Value = NodeKind> {
    prop::sample::select(vec![
        NodeKind::Ident,
        NodeKind::BasicLit,
        NodeKind::BinaryExpr,
        NodeKind::CallExpr,
        NodeKind::AssignStmt,
        NodeKind::ReturnStmt,
        NodeKind::BlockStmt,
        NodeKind::IfStmt,
        NodeKind::ValueSpec,
        NodeKind::GenDecl,
        NodeKind::FuncDecl,
        NodeKind::CommentGroup,
        NodeKind::Comment,
    ])
}
