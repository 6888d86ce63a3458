//! Integration tests for annotation pruning
//!
//! Comment groups of removed subtrees are emptied wherever they are held,
//! and emptied groups are tidied out of the file's comment list.

use graft::ast::{
    BlockStmt, CommentGroup, Decl, Expr, Field, FieldList, File, FuncDecl, GenDecl, Node,
    NodeKind, Spec, Stmt, StructType, Token, TypeSpec, ValueSpec,
};
use graft::rewrite::{
    Engine, FnRewriter, RewriteConfig, StripComments, Visit, prune_annotations, rewrite,
};

use crate::trees::{file_with_comments, groups_in, remove_kind};

fn documented_func(name: &str, doc: &CommentGroup) -> Decl {
    FuncDecl::new(name, BlockStmt::default())
        .with_doc(doc.clone())
        .into()
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn removed_declaration_loses_its_doc() {
    let gone = CommentGroup::from_lines(["// old is deprecated."]);
    let kept = CommentGroup::from_lines(["// new replaces old."]);
    let file = file_with_comments(vec![
        documented_func("old", &gone),
        documented_func("new", &kept),
    ]);

    let mut engine = Engine::default();
    let result = engine.walk(
        Some(Node::from(file)),
        &mut FnRewriter(|node: &mut Node| {
            let is_old = matches!(node, Node::Decl(Decl::Func(f)) if f.name.name == "old");
            if is_old { Visit::Remove } else { Visit::Descend }
        }),
    );

    let file = result.unwrap().into_file().unwrap();
    assert!(gone.is_empty());
    assert_eq!(kept.text(), "// new replaces old.");
    assert_eq!(file.comments.len(), 1);
    assert!(file.comments[0].same_group(&kept));
    assert_eq!(engine.stats().pruned, 1);
    assert_eq!(engine.stats().tidied, 1);
}

#[test]
fn cascaded_ancestors_lose_nested_comments() {
    let decl_doc = CommentGroup::from_lines(["// Config holds settings."]);
    let field_doc = CommentGroup::from_lines(["// Path is required."]);
    let line = CommentGroup::from_lines(["// trailing"]);

    let fields = FieldList::new(vec![
        Field::new(["Path"], Expr::ident("string"))
            .with_doc(field_doc.clone())
            .with_comment(line.clone()),
    ]);
    let spec = TypeSpec::new("Config", Expr::from(StructType { fields }));
    let decl = GenDecl::new(Token::Type, vec![spec.into()]).with_doc(decl_doc.clone());
    let file = file_with_comments(vec![decl.into()]);
    assert_eq!(file.comments.len(), 3);

    let mut engine = Engine::default();
    let result = engine.walk(
        Some(Node::from(file)),
        &mut FnRewriter(|node: &mut Node| {
            if node.as_ident() == Some("string") {
                Visit::Remove
            } else {
                Visit::Descend
            }
        }),
    );

    let file = result.unwrap().into_file().unwrap();
    assert!(file.decls.is_empty());
    assert!(file.comments.is_empty());
    assert!(decl_doc.is_empty());
    assert!(field_doc.is_empty());
    assert!(line.is_empty());
    assert_eq!(engine.stats().pruned, 3);
}

#[test]
fn cleared_optional_slot_is_pruned() {
    let recv_doc = CommentGroup::from_lines(["// receiver"]);
    let recv = FieldList::new(vec![
        Field::new(["s"], Expr::star(Expr::ident("Server"))).with_comment(recv_doc.clone()),
    ]);
    let mut func = FuncDecl::new("Close", BlockStmt::default());
    func.recv = Some(recv);

    let mut engine = Engine::default();
    let result = engine.walk(
        Some(Node::from(Decl::from(func))),
        &mut FnRewriter(remove_kind(NodeKind::StarExpr)),
    );

    let Some(Node::Decl(Decl::Func(func))) = result else {
        panic!("Expected FuncDecl");
    };
    assert!(func.recv.is_none());
    assert!(recv_doc.is_empty());
    assert_eq!(engine.stats().cleared, 1);
}

#[test]
fn removed_root_is_pruned() {
    let doc = CommentGroup::from_lines(["// x"]);
    let spec = ValueSpec::new(["x"], vec![Expr::int(1)]).with_doc(doc.clone());

    let result = rewrite(Node::from(Spec::from(spec)), |_| Visit::Remove);

    assert!(result.is_none());
    assert!(doc.is_empty());
}

#[test]
fn replaced_nodes_keep_their_comments() {
    let doc = CommentGroup::from_lines(["// a is the answer."]);
    let spec = ValueSpec::new(["a"], vec![Expr::int(42)]).with_doc(doc.clone());
    let file = file_with_comments(vec![GenDecl::new(Token::Var, vec![spec.into()]).into()]);

    let result = rewrite(Node::from(file), |node| {
        if matches!(node, Node::Spec(_)) {
            *node = Node::from(Spec::from(ValueSpec::new(["b"], vec![Expr::int(7)])));
        }
        Visit::Descend
    });

    let file = result.unwrap().into_file().unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(file.comments.len(), 1);
}

#[test]
fn pruning_skips_the_rewriter() {
    let doc = CommentGroup::from_lines(["// f"]);
    let func = FuncDecl::new(
        "f",
        BlockStmt::new(vec![Stmt::expr(Expr::call(Expr::ident("g"), vec![]))]),
    )
    .with_doc(doc.clone());

    let mut seen = Vec::new();
    let result = rewrite(Node::from(Decl::from(func)), |node| {
        seen.push(node.kind());
        Visit::Remove
    });

    assert!(result.is_none());
    assert!(doc.is_empty());
    assert_eq!(seen, vec![NodeKind::FuncDecl]);
}

// =============================================================================
// File Comment Tidying
// =============================================================================

#[test]
fn strip_comments_empties_every_group() {
    let file_doc = CommentGroup::from_lines(["// Package main is a demo."]);
    let func_doc = CommentGroup::from_lines(["// main runs."]);
    // `with_doc` also lists the package doc in `File::comments`.
    let file = file_with_comments(vec![documented_func("main", &func_doc)])
        .with_doc(file_doc.clone());
    assert_eq!(file.comments.len(), 2);

    let mut engine = Engine::default();
    let mut strip = StripComments::default();
    let result = engine.walk(Some(Node::from(file)), &mut strip);

    let file = result.unwrap().into_file().unwrap();
    assert_eq!(strip.removed, 2);
    assert!(file.doc.is_none());
    assert!(file.comments.is_empty());
    assert!(groups_in(graft::ast::NodeRef::File(&file)).is_empty());
    assert!(file_doc.is_empty());
    assert!(func_doc.is_empty());
    assert_eq!(engine.stats().tidied, 2);
}

#[test]
fn tidying_can_be_turned_off() {
    let doc = CommentGroup::from_lines(["// gone"]);
    let file = file_with_comments(vec![documented_func("gone", &doc)]);

    let mut engine = Engine::new(RewriteConfig::default().with_tidy_file_comments(false));
    let result = engine.walk(
        Some(Node::from(file)),
        &mut FnRewriter(remove_kind(NodeKind::FuncDecl)),
    );

    let file = result.unwrap().into_file().unwrap();
    assert_eq!(file.comments.len(), 1);
    assert!(file.comments[0].is_empty());
    assert_eq!(engine.stats().tidied, 0);
}

#[test]
fn comment_groups_emptied_by_the_rewriter_are_tidied() {
    let doc = CommentGroup::from_lines(["// temp"]);
    let file = file_with_comments(vec![documented_func("f", &doc)]);

    let result = rewrite(Node::from(file), |node| {
        if let Node::CommentGroup(group) = node {
            group.clear();
            return Visit::Skip;
        }
        Visit::Descend
    });

    let file: File = result.unwrap().into_file().unwrap();
    assert!(file.comments.is_empty());
}

#[test]
fn prune_annotations_counts_nonempty_groups() {
    let a = CommentGroup::from_lines(["// a"]);
    let empty = CommentGroup::default();
    let decl = GenDecl::new(
        Token::Var,
        vec![
            ValueSpec::new(["a"], vec![]).with_doc(a.clone()).into(),
            ValueSpec::new(["b"], vec![]).with_doc(empty).into(),
        ],
    );

    assert_eq!(prune_annotations(Node::from(Decl::from(decl)).view()), 1);
    assert!(a.is_empty());
}
