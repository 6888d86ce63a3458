//! Integration tests for comment groups
//!
//! A group is a shared handle: every holder sees the same comments.

use graft::ast::{BlockStmt, Comment, CommentGroup, Decl, File, FuncDecl};

#[test]
fn clones_share_one_group() {
    let group = CommentGroup::from_lines(["// first"]);
    let held = group.clone();

    group.push(Comment::new("// second"));

    assert_eq!(held.len(), 2);
    assert!(held.same_group(&group));
    assert_eq!(held.text(), "// first\n// second");
}

#[test]
fn equal_contents_are_equal_but_distinct() {
    let a = CommentGroup::from_lines(["// x"]);
    let b = CommentGroup::from_lines(["// x"]);

    assert_eq!(a, b);
    assert!(!a.same_group(&b));
}

#[test]
fn clearing_through_a_declaration_empties_the_file_list() {
    let doc = CommentGroup::from_lines(["// f does things."]);
    let func = FuncDecl::new("f", BlockStmt::default()).with_doc(doc.clone());
    let file = File::new("main", vec![func.into()]).with_comments(vec![doc]);

    if let Decl::Func(func) = &file.decls[0] {
        func.doc.as_ref().unwrap().clear();
    }

    assert!(file.comments[0].is_empty());
}

#[test]
fn take_and_replace() {
    let group = CommentGroup::from_lines(["// a", "// b"]);

    let mut comments = group.take();
    assert!(group.is_empty());

    comments.retain(|c| c.text != "// a");
    group.replace(comments);

    assert_eq!(group.comments().len(), 1);
    assert_eq!(group.comments()[0].text, "// b");
}

#[test]
fn debug_shows_contents() {
    let group = CommentGroup::from_lines(["// a"]);
    assert!(format!("{group:?}").contains("// a"));
}
