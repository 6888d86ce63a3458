//! Source files and packages.

use crate::comment::CommentGroup;
use crate::decl::Decl;
use crate::expr::Ident;

/// A source file.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct File {
    /// Package documentation.
    pub doc: Option<CommentGroup>,
    /// Package name.
    pub name: Ident,
    /// Top-level declarations.
    pub decls: Vec<Decl>,
    /// Every comment group in the file, in source order.
    ///
    /// Shares handles with the `doc` and `comment` slots of the nodes the
    /// groups are attached to. Not part of the walked structure.
    pub comments: Vec<CommentGroup>,
}

impl File {
    /// Creates a file for the given package.
    #[must_use]
    pub fn new(package: impl Into<String>, decls: Vec<Decl>) -> Self {
        Self {
            name: Ident::new(package),
            decls,
            ..Self::default()
        }
    }

    /// Builder method to register file-wide comment groups.
    #[must_use]
    pub fn with_comments(mut self, comments: Vec<CommentGroup>) -> Self {
        self.comments = comments;
        self
    }

    /// Builder method to attach package documentation.
    ///
    /// The group is also registered in [`File::comments`].
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.comments.insert(0, doc.clone());
        self.doc = Some(doc);
        self
    }
}

/// A set of files forming one package.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Package files.
    pub files: Vec<File>,
}

impl Package {
    /// Creates a package from its files.
    #[must_use]
    pub fn new(name: impl Into<String>, files: Vec<File>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}
