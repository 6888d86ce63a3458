//! Declarations and the specifications inside general declarations.

use crate::comment::CommentGroup;
use crate::expr::{BasicLit, Expr, FuncType, Ident};
use crate::field::FieldList;
use crate::node::NodeKind;
use crate::stmt::BlockStmt;
use crate::token::Token;

/// A specification inside a [`GenDecl`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Spec {
    /// Single package import
    Import(Box<ImportSpec>),
    /// Constant or variable declaration
    Value(Box<ValueSpec>),
    /// Type declaration
    Type(Box<TypeSpec>),
}

impl Spec {
    /// Returns the kind tag of this specification.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Import(_) => NodeKind::ImportSpec,
            Self::Value(_) => NodeKind::ValueSpec,
            Self::Type(_) => NodeKind::TypeSpec,
        }
    }

    /// Leading documentation of this specification.
    #[must_use]
    pub fn doc(&self) -> Option<&CommentGroup> {
        match self {
            Self::Import(s) => s.doc.as_ref(),
            Self::Value(s) => s.doc.as_ref(),
            Self::Type(s) => s.doc.as_ref(),
        }
    }
}

/// A single package import.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ImportSpec {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Local package name, including `.` and `_`.
    pub name: Option<Ident>,
    /// Import path.
    pub path: BasicLit,
    /// Trailing line comment.
    pub comment: Option<CommentGroup>,
}

impl ImportSpec {
    /// Creates an import of the given path.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: BasicLit::string(path),
            ..Self::default()
        }
    }
}

/// A constant or variable declaration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ValueSpec {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Declared names.
    pub names: Vec<Ident>,
    /// Declared type.
    pub ty: Option<Expr>,
    /// Initial values.
    pub values: Vec<Expr>,
    /// Trailing line comment.
    pub comment: Option<CommentGroup>,
}

impl ValueSpec {
    /// Creates `names = values` without an explicit type.
    #[must_use]
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, values: Vec<Expr>) -> Self {
        Self {
            names: names.into_iter().map(Ident::new).collect(),
            values,
            ..Self::default()
        }
    }

    /// Builder method to attach leading documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Builder method to attach a trailing comment.
    #[must_use]
    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// A type declaration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TypeSpec {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Type name.
    pub name: Ident,
    /// Type definition.
    pub ty: Expr,
    /// Trailing line comment.
    pub comment: Option<CommentGroup>,
}

impl TypeSpec {
    /// Creates `type name ty`.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Expr) -> Self {
        Self {
            name: Ident::new(name),
            ty,
            ..Self::default()
        }
    }
}

impl From<ImportSpec> for Spec {
    fn from(spec: ImportSpec) -> Self {
        Self::Import(Box::new(spec))
    }
}

impl From<ValueSpec> for Spec {
    fn from(spec: ValueSpec) -> Self {
        Self::Value(Box::new(spec))
    }
}

impl From<TypeSpec> for Spec {
    fn from(spec: TypeSpec) -> Self {
        Self::Type(Box::new(spec))
    }
}

/// A top-level or statement-level declaration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Decl {
    /// Placeholder for a declaration that could not be parsed.
    #[default]
    Bad,
    /// `import`, `const`, `type`, or `var` declaration
    Gen(Box<GenDecl>),
    /// Function or method declaration
    Func(Box<FuncDecl>),
}

impl Decl {
    /// Returns the kind tag of this declaration.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Bad => NodeKind::BadDecl,
            Self::Gen(_) => NodeKind::GenDecl,
            Self::Func(_) => NodeKind::FuncDecl,
        }
    }

    /// Leading documentation of this declaration.
    #[must_use]
    pub fn doc(&self) -> Option<&CommentGroup> {
        match self {
            Self::Bad => None,
            Self::Gen(d) => d.doc.as_ref(),
            Self::Func(d) => d.doc.as_ref(),
        }
    }
}

/// An `import`, `const`, `type`, or `var` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenDecl {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Declaration keyword.
    pub tok: Token,
    /// Specifications, in source order.
    pub specs: Vec<Spec>,
}

impl GenDecl {
    /// Creates a declaration of the given keyword.
    #[must_use]
    pub fn new(tok: Token, specs: Vec<Spec>) -> Self {
        Self {
            doc: None,
            tok,
            specs,
        }
    }

    /// Builder method to attach leading documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A function or method declaration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FuncDecl {
    /// Leading documentation.
    pub doc: Option<CommentGroup>,
    /// Method receiver; absent for functions.
    pub recv: Option<FieldList>,
    /// Function name.
    pub name: Ident,
    /// Signature.
    pub ty: FuncType,
    /// Body; absent for external functions.
    pub body: Option<BlockStmt>,
}

impl FuncDecl {
    /// Creates a parameterless function with the given body.
    #[must_use]
    pub fn new(name: impl Into<String>, body: BlockStmt) -> Self {
        Self {
            name: Ident::new(name),
            body: Some(body),
            ..Self::default()
        }
    }

    /// Builder method to attach leading documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }
}

impl From<GenDecl> for Decl {
    fn from(decl: GenDecl) -> Self {
        Self::Gen(Box::new(decl))
    }
}

impl From<FuncDecl> for Decl {
    fn from(decl: FuncDecl) -> Self {
        Self::Func(Box::new(decl))
    }
}
