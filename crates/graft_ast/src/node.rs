//! The closed node taxonomy: kind tags, categories, and the owning [`Node`].

use std::fmt;

use crate::comment::{Comment, CommentGroup};
use crate::decl::{Decl, Spec};
use crate::expr::{BasicLit, Expr, Ident};
use crate::field::{Field, FieldList};
use crate::file::{File, Package};
use crate::stmt::Stmt;
use crate::visit::NodeRef;

/// Broad grouping of node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Comments and comment groups.
    Comment,
    /// Fields and field lists.
    Field,
    /// Expressions.
    Expr,
    /// Type expressions; accepted wherever an expression is.
    Type,
    /// Statements.
    Stmt,
    /// Specifications inside general declarations.
    Spec,
    /// Declarations.
    Decl,
    /// Files and packages.
    File,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comment => "comment",
            Self::Field => "field",
            Self::Expr => "expression",
            Self::Type => "type",
            Self::Stmt => "statement",
            Self::Spec => "specification",
            Self::Decl => "declaration",
            Self::File => "file",
        };
        f.write_str(name)
    }
}

macro_rules! node_kinds {
    ($($category:ident => [$($(#[$doc:meta])* $kind:ident),* $(,)?]),* $(,)?) => {
        /// Kind tag of a node.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($($(#[$doc])* $kind,)*)*
        }

        impl NodeKind {
            /// Every kind, grouped by category.
            pub const ALL: &'static [NodeKind] = &[$($(NodeKind::$kind,)*)*];

            /// The kind's name, e.g. `"CallExpr"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($(NodeKind::$kind => stringify!($kind),)*)*
                }
            }

            /// The category this kind belongs to.
            #[must_use]
            pub const fn category(self) -> Category {
                match self {
                    $($(NodeKind::$kind => Category::$category,)*)*
                }
            }
        }
    };
}

node_kinds! {
    Comment => [
        /// `// text` or `/* text */`
        Comment,
        /// Adjacent comments
        CommentGroup,
    ],
    Field => [
        /// Struct field, parameter, result, or method
        Field,
        /// Braced or parenthesized field list
        FieldList,
    ],
    Expr => [
        /// Unparsable expression
        BadExpr,
        /// Identifier
        Ident,
        /// `...T`
        Ellipsis,
        /// Basic literal
        BasicLit,
        /// Function literal
        FuncLit,
        /// Composite literal
        CompositeLit,
        /// `(x)`
        ParenExpr,
        /// `x.sel`
        SelectorExpr,
        /// `x[i]`
        IndexExpr,
        /// `x[a:b:c]`
        SliceExpr,
        /// `x.(T)`
        TypeAssertExpr,
        /// `f(args)`
        CallExpr,
        /// `*x`
        StarExpr,
        /// `op x`
        UnaryExpr,
        /// `x op y`
        BinaryExpr,
        /// `key: value`
        KeyValueExpr,
    ],
    Type => [
        /// `[N]T` or `[]T`
        ArrayType,
        /// `struct { ... }`
        StructType,
        /// `func(...) ...`
        FuncType,
        /// `interface { ... }`
        InterfaceType,
        /// `map[K]V`
        MapType,
        /// `chan T`
        ChanType,
    ],
    Stmt => [
        /// Unparsable statement
        BadStmt,
        /// Declaration statement
        DeclStmt,
        /// Empty statement
        EmptyStmt,
        /// Labeled statement
        LabeledStmt,
        /// Expression statement
        ExprStmt,
        /// Channel send
        SendStmt,
        /// `x++` / `x--`
        IncDecStmt,
        /// Assignment
        AssignStmt,
        /// `go` statement
        GoStmt,
        /// `defer` statement
        DeferStmt,
        /// `return` statement
        ReturnStmt,
        /// Branch statement
        BranchStmt,
        /// Block
        BlockStmt,
        /// `if` statement
        IfStmt,
        /// Switch case clause
        CaseClause,
        /// Expression switch
        SwitchStmt,
        /// Type switch
        TypeSwitchStmt,
        /// Select case clause
        CommClause,
        /// `select` statement
        SelectStmt,
        /// `for` loop
        ForStmt,
        /// `for range` loop
        RangeStmt,
    ],
    Spec => [
        /// Import specification
        ImportSpec,
        /// Constant or variable specification
        ValueSpec,
        /// Type specification
        TypeSpec,
    ],
    Decl => [
        /// Unparsable declaration
        BadDecl,
        /// General declaration
        GenDecl,
        /// Function declaration
        FuncDecl,
    ],
    File => [
        /// Source file
        File,
        /// Package of files
        Package,
    ],
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned node of any kind.
///
/// This is what a rewriter sees and what it may replace. Family enums
/// ([`Expr`], [`Stmt`], [`Spec`], [`Decl`]) appear as single variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A comment
    Comment(Comment),
    /// A comment group handle
    CommentGroup(CommentGroup),
    /// A field
    Field(Box<Field>),
    /// A field list
    FieldList(FieldList),
    /// An expression or type
    Expr(Expr),
    /// A statement
    Stmt(Stmt),
    /// A specification
    Spec(Spec),
    /// A declaration
    Decl(Decl),
    /// A source file
    File(Box<File>),
    /// A package
    Package(Package),
}

impl Node {
    /// Returns the kind tag of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Comment(_) => NodeKind::Comment,
            Self::CommentGroup(_) => NodeKind::CommentGroup,
            Self::Field(_) => NodeKind::Field,
            Self::FieldList(_) => NodeKind::FieldList,
            Self::Expr(e) => e.kind(),
            Self::Stmt(s) => s.kind(),
            Self::Spec(s) => s.kind(),
            Self::Decl(d) => d.kind(),
            Self::File(_) => NodeKind::File,
            Self::Package(_) => NodeKind::Package,
        }
    }

    /// Returns the category of this node.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind().category()
    }

    /// Borrows this node as a [`NodeRef`].
    #[must_use]
    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Self::Comment(c) => NodeRef::Comment(c),
            Self::CommentGroup(g) => NodeRef::CommentGroup(g),
            Self::Field(f) => NodeRef::Field(f),
            Self::FieldList(l) => NodeRef::FieldList(l),
            Self::Expr(e) => NodeRef::Expr(e),
            Self::Stmt(s) => NodeRef::Stmt(s),
            Self::Spec(s) => NodeRef::Spec(s),
            Self::Decl(d) => NodeRef::Decl(d),
            Self::File(f) => NodeRef::File(f),
            Self::Package(p) => NodeRef::Package(p),
        }
    }

    /// Returns the expression, or None if this is not an expression.
    #[must_use]
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the statement, or None if this is not a statement.
    #[must_use]
    pub fn as_stmt(&self) -> Option<&Stmt> {
        match self {
            Self::Stmt(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the identifier name, or None if this is not an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        self.as_expr().and_then(Expr::as_ident)
    }

    /// Returns the file, or None if this is not a file.
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(f) => Some(f),
            _ => None,
        }
    }

    /// Unwraps a file node.
    ///
    /// # Errors
    ///
    /// Returns the node unchanged if it is not a file.
    pub fn into_file(self) -> Result<File, Self> {
        match self {
            Self::File(f) => Ok(*f),
            other => Err(other),
        }
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<CommentGroup> for Node {
    fn from(group: CommentGroup) -> Self {
        Self::CommentGroup(group)
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Self::Field(Box::new(field))
    }
}

impl From<FieldList> for Node {
    fn from(list: FieldList) -> Self {
        Self::FieldList(list)
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Self::Expr(expr)
    }
}

impl From<Ident> for Node {
    fn from(ident: Ident) -> Self {
        Self::Expr(Expr::Ident(ident))
    }
}

impl From<BasicLit> for Node {
    fn from(lit: BasicLit) -> Self {
        Self::Expr(Expr::BasicLit(lit))
    }
}

impl From<Stmt> for Node {
    fn from(stmt: Stmt) -> Self {
        Self::Stmt(stmt)
    }
}

impl From<Spec> for Node {
    fn from(spec: Spec) -> Self {
        Self::Spec(spec)
    }
}

impl From<Decl> for Node {
    fn from(decl: Decl) -> Self {
        Self::Decl(decl)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(Box::new(file))
    }
}

impl From<Package> for Node {
    fn from(package: Package) -> Self {
        Self::Package(package)
    }
}
