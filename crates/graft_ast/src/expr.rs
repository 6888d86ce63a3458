//! Expression and type nodes.
//!
//! Types are expressions: a field's type slot holds an `Expr` whether it is
//! an identifier like `int` or a composite like `map[string]T`.

use crate::field::FieldList;
use crate::node::NodeKind;
use crate::stmt::BlockStmt;
use crate::token::{ChanDir, LitKind, Token};

/// An expression or type node.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Expr {
    /// Placeholder for an expression that could not be parsed.
    #[default]
    Bad,
    /// Identifier like `x`
    Ident(Ident),
    /// Literal of basic type like `42` or `"hi"`
    BasicLit(BasicLit),
    /// `...T` in parameter lists or `[...]T` array lengths
    Ellipsis(Box<Ellipsis>),
    /// Function literal like `func(x int) { ... }`
    FuncLit(Box<FuncLit>),
    /// Composite literal like `T{a, b}`
    CompositeLit(Box<CompositeLit>),
    /// Parenthesized expression like `(x)`
    Paren(Box<ParenExpr>),
    /// Selector like `x.y`
    Selector(Box<SelectorExpr>),
    /// Index expression like `x[i]`
    Index(Box<IndexExpr>),
    /// Slice expression like `x[a:b:c]`
    Slice(Box<SliceExpr>),
    /// Type assertion like `x.(T)`
    TypeAssert(Box<TypeAssertExpr>),
    /// Call like `f(a, b)`
    Call(Box<CallExpr>),
    /// Pointer type or dereference like `*x`
    Star(Box<StarExpr>),
    /// Unary expression like `-x`
    Unary(Box<UnaryExpr>),
    /// Binary expression like `x + y`
    Binary(Box<BinaryExpr>),
    /// `key: value` inside a composite literal
    KeyValue(Box<KeyValueExpr>),
    /// Array or slice type like `[N]T` or `[]T`
    ArrayType(Box<ArrayType>),
    /// Struct type like `struct { ... }`
    StructType(Box<StructType>),
    /// Function type like `func(int) error`
    FuncType(Box<FuncType>),
    /// Interface type like `interface { ... }`
    InterfaceType(Box<InterfaceType>),
    /// Map type like `map[K]V`
    MapType(Box<MapType>),
    /// Channel type like `chan T`
    ChanType(Box<ChanType>),
}

impl Expr {
    /// Returns the kind tag of this expression.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Bad => NodeKind::BadExpr,
            Self::Ident(_) => NodeKind::Ident,
            Self::BasicLit(_) => NodeKind::BasicLit,
            Self::Ellipsis(_) => NodeKind::Ellipsis,
            Self::FuncLit(_) => NodeKind::FuncLit,
            Self::CompositeLit(_) => NodeKind::CompositeLit,
            Self::Paren(_) => NodeKind::ParenExpr,
            Self::Selector(_) => NodeKind::SelectorExpr,
            Self::Index(_) => NodeKind::IndexExpr,
            Self::Slice(_) => NodeKind::SliceExpr,
            Self::TypeAssert(_) => NodeKind::TypeAssertExpr,
            Self::Call(_) => NodeKind::CallExpr,
            Self::Star(_) => NodeKind::StarExpr,
            Self::Unary(_) => NodeKind::UnaryExpr,
            Self::Binary(_) => NodeKind::BinaryExpr,
            Self::KeyValue(_) => NodeKind::KeyValueExpr,
            Self::ArrayType(_) => NodeKind::ArrayType,
            Self::StructType(_) => NodeKind::StructType,
            Self::FuncType(_) => NodeKind::FuncType,
            Self::InterfaceType(_) => NodeKind::InterfaceType,
            Self::MapType(_) => NodeKind::MapType,
            Self::ChanType(_) => NodeKind::ChanType,
        }
    }

    /// Creates an identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(Ident::new(name))
    }

    /// Creates an integer literal expression.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::BasicLit(BasicLit::int(value))
    }

    /// Creates a string literal expression.
    #[must_use]
    pub fn string(value: &str) -> Self {
        Self::BasicLit(BasicLit::string(value))
    }

    /// Creates a call expression.
    #[must_use]
    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        CallExpr::new(fun, args).into()
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(x: Expr, op: Token, y: Expr) -> Self {
        BinaryExpr { x, op, y }.into()
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: Token, x: Expr) -> Self {
        UnaryExpr { op, x }.into()
    }

    /// Creates a parenthesized expression.
    #[must_use]
    pub fn paren(x: Expr) -> Self {
        ParenExpr { x }.into()
    }

    /// Creates a selector expression `x.sel`.
    #[must_use]
    pub fn selector(x: Expr, sel: impl Into<String>) -> Self {
        SelectorExpr {
            x,
            sel: Ident::new(sel),
        }
        .into()
    }

    /// Creates a pointer type or dereference `*x`.
    #[must_use]
    pub fn star(x: Expr) -> Self {
        StarExpr { x }.into()
    }

    /// Returns the identifier name, or None if not an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Returns the literal, or None if not a basic literal.
    #[must_use]
    pub fn as_basic_lit(&self) -> Option<&BasicLit> {
        match self {
            Self::BasicLit(lit) => Some(lit),
            _ => None,
        }
    }
}

/// An identifier.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Ident {
    /// Identifier name.
    pub name: String,
}

impl Ident {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns true for the blank identifier `_`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

/// A literal of basic type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BasicLit {
    /// Lexical class of the literal.
    pub kind: LitKind,
    /// Literal source text, e.g. `42`, `'a'`, `"foo"`.
    pub value: String,
}

impl BasicLit {
    /// Creates a literal from its class and source text.
    #[must_use]
    pub fn new(kind: LitKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::new(LitKind::Int, value.to_string())
    }

    /// Creates a double-quoted string literal.
    #[must_use]
    pub fn string(value: &str) -> Self {
        Self::new(LitKind::String, format!("{value:?}"))
    }
}

/// `...` with an optional element type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Ellipsis {
    /// Element type, absent in `[...]T` array lengths.
    pub elt: Option<Expr>,
}

/// A function literal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FuncLit {
    /// Function signature.
    pub ty: FuncType,
    /// Function body.
    pub body: BlockStmt,
}

/// A composite literal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompositeLit {
    /// Literal type, absent when elided inside an outer literal.
    pub ty: Option<Expr>,
    /// Elements.
    pub elts: Vec<Expr>,
}

/// A parenthesized expression.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ParenExpr {
    /// Inner expression.
    pub x: Expr,
}

/// A selector expression `x.sel`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorExpr {
    /// Operand.
    pub x: Expr,
    /// Field or method selector.
    pub sel: Ident,
}

/// An index expression `x[index]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct IndexExpr {
    /// Operand.
    pub x: Expr,
    /// Index.
    pub index: Expr,
}

/// A slice expression `x[low:high:max]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SliceExpr {
    /// Operand.
    pub x: Expr,
    /// Lower bound.
    pub low: Option<Expr>,
    /// Upper bound.
    pub high: Option<Expr>,
    /// Capacity bound.
    pub max: Option<Expr>,
    /// True for the three-index form.
    pub slice3: bool,
}

/// A type assertion `x.(T)`, or `x.(type)` inside a type switch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TypeAssertExpr {
    /// Operand.
    pub x: Expr,
    /// Asserted type, absent for `x.(type)`.
    pub ty: Option<Expr>,
}

/// A call expression.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CallExpr {
    /// Called function.
    pub fun: Expr,
    /// Arguments.
    pub args: Vec<Expr>,
    /// True when the last argument is spread with `...`.
    pub has_ellipsis: bool,
}

impl CallExpr {
    /// Creates a call without a spread argument.
    #[must_use]
    pub fn new(fun: Expr, args: Vec<Expr>) -> Self {
        Self {
            fun,
            args,
            has_ellipsis: false,
        }
    }
}

/// A pointer type or dereference.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StarExpr {
    /// Operand.
    pub x: Expr,
}

/// A unary expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnaryExpr {
    /// Operator.
    pub op: Token,
    /// Operand.
    pub x: Expr,
}

/// A binary expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryExpr {
    /// Left operand.
    pub x: Expr,
    /// Operator.
    pub op: Token,
    /// Right operand.
    pub y: Expr,
}

/// A `key: value` pair in a composite literal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyValueExpr {
    /// Key.
    pub key: Expr,
    /// Value.
    pub value: Expr,
}

/// An array or slice type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ArrayType {
    /// Length; absent for slice types.
    pub len: Option<Expr>,
    /// Element type.
    pub elt: Expr,
}

/// A struct type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StructType {
    /// Field declarations.
    pub fields: FieldList,
}

/// A function type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FuncType {
    /// Parameters.
    pub params: Option<FieldList>,
    /// Results.
    pub results: Option<FieldList>,
}

/// An interface type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InterfaceType {
    /// Methods and embedded interfaces.
    pub methods: Option<FieldList>,
}

/// A map type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MapType {
    /// Key type.
    pub key: Expr,
    /// Value type.
    pub value: Expr,
}

/// A channel type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ChanType {
    /// Direction.
    pub dir: ChanDir,
    /// Element type.
    pub value: Expr,
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Self::Ident(ident)
    }
}

impl From<BasicLit> for Expr {
    fn from(lit: BasicLit) -> Self {
        Self::BasicLit(lit)
    }
}

crate::boxed_variants! {
    Expr {
        Ellipsis(Ellipsis),
        FuncLit(FuncLit),
        CompositeLit(CompositeLit),
        Paren(ParenExpr),
        Selector(SelectorExpr),
        Index(IndexExpr),
        Slice(SliceExpr),
        TypeAssert(TypeAssertExpr),
        Call(CallExpr),
        Star(StarExpr),
        Unary(UnaryExpr),
        Binary(BinaryExpr),
        KeyValue(KeyValueExpr),
        ArrayType(ArrayType),
        StructType(StructType),
        FuncType(FuncType),
        InterfaceType(InterfaceType),
        MapType(MapType),
        ChanType(ChanType),
    }
}
