//! Integration tests for the node taxonomy
//!
//! Tests kind tags, categories, and family conversions.

use std::collections::HashSet;

use graft::ast::{
    BlockStmt, Category, Decl, Expr, Field, FieldList, File, FuncDecl, GenDecl, ImportSpec, Node,
    NodeKind, Package, Spec, Stmt, Token, TypeSpec, ValueSpec,
};

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn every_kind_is_listed_once() {
    assert_eq!(NodeKind::ALL.len(), 55);
    let unique: HashSet<_> = NodeKind::ALL.iter().collect();
    assert_eq!(unique.len(), NodeKind::ALL.len());
}

#[test]
fn kind_names_match_display() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(NodeKind::CallExpr.name(), "CallExpr");
}

#[test]
fn categories_partition_the_kinds() {
    let count = |category: Category| {
        NodeKind::ALL
            .iter()
            .filter(|k| k.category() == category)
            .count()
    };

    assert_eq!(count(Category::Comment), 2);
    assert_eq!(count(Category::Field), 2);
    assert_eq!(count(Category::Expr), 16);
    assert_eq!(count(Category::Type), 6);
    assert_eq!(count(Category::Stmt), 21);
    assert_eq!(count(Category::Spec), 3);
    assert_eq!(count(Category::Decl), 3);
    assert_eq!(count(Category::File), 2);
}

#[test]
fn type_expressions_are_their_own_category() {
    let map = Node::from(Expr::from(graft::ast::MapType {
        key: Expr::ident("string"),
        value: Expr::ident("int"),
    }));
    assert_eq!(map.kind(), NodeKind::MapType);
    assert_eq!(map.category(), Category::Type);
    assert!(map.as_expr().is_some());
}

// =============================================================================
// Family Conversions
// =============================================================================

#[test]
fn node_kind_follows_the_wrapped_family() {
    assert_eq!(Node::from(Expr::ident("x")).kind(), NodeKind::Ident);
    assert_eq!(Node::from(Expr::int(1)).kind(), NodeKind::BasicLit);
    assert_eq!(Node::from(Stmt::Empty).kind(), NodeKind::EmptyStmt);
    assert_eq!(Node::from(Stmt::default()).kind(), NodeKind::BadStmt);
    assert_eq!(Node::from(Expr::default()).kind(), NodeKind::BadExpr);
    assert_eq!(Node::from(Decl::default()).kind(), NodeKind::BadDecl);
    assert_eq!(
        Node::from(Spec::from(ImportSpec::new("fmt"))).kind(),
        NodeKind::ImportSpec
    );
    assert_eq!(
        Node::from(Spec::from(TypeSpec::new("T", Expr::ident("int")))).kind(),
        NodeKind::TypeSpec
    );
    assert_eq!(
        Node::from(Decl::from(FuncDecl::new("f", BlockStmt::default()))).kind(),
        NodeKind::FuncDecl
    );
    assert_eq!(Node::from(Field::anonymous(Expr::ident("T"))).kind(), NodeKind::Field);
    assert_eq!(Node::from(FieldList::default()).kind(), NodeKind::FieldList);
    assert_eq!(Node::from(Package::new("main", vec![])).kind(), NodeKind::Package);
}

#[test]
fn accessors_reject_other_families() {
    let stmt = Node::from(Stmt::ret(vec![]));
    assert!(stmt.as_expr().is_none());
    assert!(stmt.as_stmt().is_some());
    assert!(stmt.as_ident().is_none());
    assert!(stmt.as_file().is_none());

    let node = Node::from(Expr::ident("x"));
    assert_eq!(node.clone().into_file(), Err(node));
}

#[test]
fn file_round_trips_through_node() {
    let decl = GenDecl::new(
        Token::Const,
        vec![Spec::from(ValueSpec::new(["Pi"], vec![Expr::string("3.14")]))],
    );
    let file = File::new("math", vec![decl.into()]);

    let node = Node::from(file.clone());
    assert_eq!(node.as_file(), Some(&file));
    assert_eq!(node.into_file(), Ok(file));
}

#[test]
fn field_counts_names() {
    let list = FieldList::new(vec![
        Field::new(["a", "b"], Expr::ident("int")),
        Field::anonymous(Expr::ident("io.Reader")),
    ]);
    assert_eq!(list.num_fields(), 3);
}
