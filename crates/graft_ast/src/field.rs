//! Struct fields, parameters, results, and method lists.

use crate::comment::CommentGroup;
use crate::expr::{BasicLit, Expr, Ident};

/// A field declaration in a struct type, or a parameter, result, or
/// method in a signature or interface.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Field {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Field or parameter names; empty for embedded or anonymous fields.
    pub names: Vec<Ident>,
    /// Field type.
    pub ty: Expr,
    /// Struct tag.
    pub tag: Option<BasicLit>,
    /// Trailing line comment.
    pub comment: Option<CommentGroup>,
}

impl Field {
    /// Creates a field with the given names and type.
    #[must_use]
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, ty: Expr) -> Self {
        Self {
            names: names.into_iter().map(Ident::new).collect(),
            ty,
            ..Self::default()
        }
    }

    /// Creates an embedded or unnamed field.
    #[must_use]
    pub fn anonymous(ty: Expr) -> Self {
        Self {
            ty,
            ..Self::default()
        }
    }

    /// Builder method to attach leading documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Builder method to attach a struct tag.
    #[must_use]
    pub fn with_tag(mut self, tag: BasicLit) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Builder method to attach a trailing comment.
    #[must_use]
    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// A list of fields enclosed by braces or parentheses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FieldList {
    /// The fields, in source order.
    pub list: Vec<Field>,
}

impl FieldList {
    /// Creates a field list.
    #[must_use]
    pub fn new(list: Vec<Field>) -> Self {
        Self { list }
    }

    /// Returns the number of parameters or struct fields, counting each
    /// name of a multi-name field separately.
    #[must_use]
    pub fn num_fields(&self) -> usize {
        self.list.iter().map(|f| f.names.len().max(1)).sum()
    }
}
