//! Per-kind slot metadata.
//!
//! Every node kind exposes an ordered list of child slots through [`slots`].
//! Each [`Slot`] names its owner, the family or kind it accepts, and its
//! [`Arity`]. The walker visits slots in exactly this order and uses the
//! arity to decide what a removed child does to its parent:
//!
//! | Arity | Child removed |
//! |-------|---------------|
//! | `Required` | the owner is removed too (cascade) |
//! | `Optional` | the slot is cleared |
//! | `List(Tolerated)` | the element is dropped |
//! | `List(Cascades)` | the element is dropped; if that empties the list, the owner cascades |
//!
//! A list that was already empty before the walk never cascades.
//! `File::comments` is not a slot: it is kept in step by the walker instead.

use std::fmt;

use graft_ast::NodeKind as K;
use graft_ast::{Category, NodeKind};

use self::Empty::{Cascades, Tolerated};

/// What a slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotType {
    /// Any expression or type.
    Expr,
    /// Any statement.
    Stmt,
    /// Any declaration.
    Decl,
    /// Any specification.
    Spec,
    /// Exactly one kind.
    Kind(NodeKind),
}

impl SlotType {
    /// Returns true if a node of `kind` may fill this slot.
    #[must_use]
    pub fn accepts(self, kind: NodeKind) -> bool {
        match self {
            Self::Expr => matches!(kind.category(), Category::Expr | Category::Type),
            Self::Stmt => kind.category() == Category::Stmt,
            Self::Decl => kind.category() == Category::Decl,
            Self::Spec => kind.category() == Category::Spec,
            Self::Kind(expected) => expected == kind,
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr => f.write_str("expression"),
            Self::Stmt => f.write_str("statement"),
            Self::Decl => f.write_str("declaration"),
            Self::Spec => f.write_str("specification"),
            Self::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

/// What happens to a list slot when the walk empties it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Empty {
    /// An empty list is fine.
    Tolerated,
    /// The owner is removed.
    Cascades,
}

/// Multiplicity of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one child.
    Required,
    /// Zero or one child.
    Optional,
    /// Zero or more children, in order.
    List(Empty),
}

/// One child slot of a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Kind of the node owning the slot.
    pub owner: NodeKind,
    /// Field name, e.g. `"args"`.
    pub name: &'static str,
    /// Accepted family or kind.
    pub ty: SlotType,
    /// Multiplicity.
    pub arity: Arity,
}

impl Slot {
    const fn new(owner: NodeKind, name: &'static str, ty: SlotType, arity: Arity) -> Self {
        Self {
            owner,
            name,
            ty,
            arity,
        }
    }

    const fn required(owner: NodeKind, name: &'static str, ty: SlotType) -> Self {
        Self::new(owner, name, ty, Arity::Required)
    }

    const fn optional(owner: NodeKind, name: &'static str, ty: SlotType) -> Self {
        Self::new(owner, name, ty, Arity::Optional)
    }

    const fn list(owner: NodeKind, name: &'static str, ty: SlotType, empty: Empty) -> Self {
        Self::new(owner, name, ty, Arity::List(empty))
    }

    /// Returns true if emptying this list removes the owner.
    #[must_use]
    pub const fn cascades_when_emptied(&self) -> bool {
        matches!(self.arity, Arity::List(Empty::Cascades))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

const EXPR: SlotType = SlotType::Expr;
const STMT: SlotType = SlotType::Stmt;
const IDENT: SlotType = SlotType::Kind(K::Ident);
const LIT: SlotType = SlotType::Kind(K::BasicLit);
const BLOCK: SlotType = SlotType::Kind(K::BlockStmt);
const FUNC_TYPE: SlotType = SlotType::Kind(K::FuncType);
const FIELDS: SlotType = SlotType::Kind(K::FieldList);
const GROUP: SlotType = SlotType::Kind(K::CommentGroup);

// =============================================================================
// Comments and fields
// =============================================================================

/// `CommentGroup`
pub static COMMENT_GROUP: [Slot; 1] = [Slot::list(
    K::CommentGroup,
    "list",
    SlotType::Kind(K::Comment),
    Cascades,
)];

/// `Field`
pub static FIELD: [Slot; 5] = [
    Slot::optional(K::Field, "doc", GROUP),
    Slot::list(K::Field, "names", IDENT, Tolerated),
    Slot::required(K::Field, "type", EXPR),
    Slot::optional(K::Field, "tag", LIT),
    Slot::optional(K::Field, "comment", GROUP),
];

/// `FieldList`
pub static FIELD_LIST: [Slot; 1] = [Slot::list(
    K::FieldList,
    "list",
    SlotType::Kind(K::Field),
    Cascades,
)];

// =============================================================================
// Expressions
// =============================================================================

/// `Ellipsis`
pub static ELLIPSIS: [Slot; 1] = [Slot::optional(K::Ellipsis, "elt", EXPR)];

/// `FuncLit`
pub static FUNC_LIT: [Slot; 2] = [
    Slot::required(K::FuncLit, "type", FUNC_TYPE),
    Slot::required(K::FuncLit, "body", BLOCK),
];

/// `CompositeLit`
pub static COMPOSITE_LIT: [Slot; 2] = [
    Slot::optional(K::CompositeLit, "type", EXPR),
    Slot::list(K::CompositeLit, "elts", EXPR, Tolerated),
];

/// `ParenExpr`
pub static PAREN_EXPR: [Slot; 1] = [Slot::required(K::ParenExpr, "x", EXPR)];

/// `SelectorExpr`
pub static SELECTOR_EXPR: [Slot; 2] = [
    Slot::required(K::SelectorExpr, "x", EXPR),
    Slot::required(K::SelectorExpr, "sel", IDENT),
];

/// `IndexExpr`
pub static INDEX_EXPR: [Slot; 2] = [
    Slot::required(K::IndexExpr, "x", EXPR),
    Slot::required(K::IndexExpr, "index", EXPR),
];

/// `SliceExpr`
pub static SLICE_EXPR: [Slot; 4] = [
    Slot::required(K::SliceExpr, "x", EXPR),
    Slot::optional(K::SliceExpr, "low", EXPR),
    Slot::optional(K::SliceExpr, "high", EXPR),
    Slot::optional(K::SliceExpr, "max", EXPR),
];

/// `TypeAssertExpr`
pub static TYPE_ASSERT_EXPR: [Slot; 2] = [
    Slot::required(K::TypeAssertExpr, "x", EXPR),
    Slot::optional(K::TypeAssertExpr, "type", EXPR),
];

/// `CallExpr`
pub static CALL_EXPR: [Slot; 2] = [
    Slot::required(K::CallExpr, "fun", EXPR),
    Slot::list(K::CallExpr, "args", EXPR, Tolerated),
];

/// `StarExpr`
pub static STAR_EXPR: [Slot; 1] = [Slot::required(K::StarExpr, "x", EXPR)];

/// `UnaryExpr`
pub static UNARY_EXPR: [Slot; 1] = [Slot::required(K::UnaryExpr, "x", EXPR)];

/// `BinaryExpr`
pub static BINARY_EXPR: [Slot; 2] = [
    Slot::required(K::BinaryExpr, "x", EXPR),
    Slot::required(K::BinaryExpr, "y", EXPR),
];

/// `KeyValueExpr`
pub static KEY_VALUE_EXPR: [Slot; 2] = [
    Slot::required(K::KeyValueExpr, "key", EXPR),
    Slot::required(K::KeyValueExpr, "value", EXPR),
];

// =============================================================================
// Types
// =============================================================================

/// `ArrayType`
pub static ARRAY_TYPE: [Slot; 2] = [
    Slot::optional(K::ArrayType, "len", EXPR),
    Slot::required(K::ArrayType, "elt", EXPR),
];

/// `StructType`
pub static STRUCT_TYPE: [Slot; 1] = [Slot::required(K::StructType, "fields", FIELDS)];

/// `FuncType`
pub static FUNC_TYPE_SLOTS: [Slot; 2] = [
    Slot::optional(K::FuncType, "params", FIELDS),
    Slot::optional(K::FuncType, "results", FIELDS),
];

/// `InterfaceType`
pub static INTERFACE_TYPE: [Slot; 1] = [Slot::optional(K::InterfaceType, "methods", FIELDS)];

/// `MapType`
pub static MAP_TYPE: [Slot; 2] = [
    Slot::required(K::MapType, "key", EXPR),
    Slot::required(K::MapType, "value", EXPR),
];

/// `ChanType`
pub static CHAN_TYPE: [Slot; 1] = [Slot::required(K::ChanType, "value", EXPR)];

// =============================================================================
// Statements
// =============================================================================

/// `DeclStmt`
pub static DECL_STMT: [Slot; 1] = [Slot::required(K::DeclStmt, "decl", SlotType::Decl)];

/// `LabeledStmt`
pub static LABELED_STMT: [Slot; 2] = [
    Slot::required(K::LabeledStmt, "label", IDENT),
    Slot::required(K::LabeledStmt, "stmt", STMT),
];

/// `ExprStmt`
pub static EXPR_STMT: [Slot; 1] = [Slot::required(K::ExprStmt, "x", EXPR)];

/// `SendStmt`
pub static SEND_STMT: [Slot; 2] = [
    Slot::required(K::SendStmt, "chan", EXPR),
    Slot::required(K::SendStmt, "value", EXPR),
];

/// `IncDecStmt`
pub static INC_DEC_STMT: [Slot; 1] = [Slot::required(K::IncDecStmt, "x", EXPR)];

/// `AssignStmt`
pub static ASSIGN_STMT: [Slot; 2] = [
    Slot::list(K::AssignStmt, "lhs", EXPR, Cascades),
    Slot::list(K::AssignStmt, "rhs", EXPR, Cascades),
];

/// `GoStmt`
pub static GO_STMT: [Slot; 1] = [Slot::required(
    K::GoStmt,
    "call",
    SlotType::Kind(K::CallExpr),
)];

/// `DeferStmt`
pub static DEFER_STMT: [Slot; 1] = [Slot::required(
    K::DeferStmt,
    "call",
    SlotType::Kind(K::CallExpr),
)];

/// `ReturnStmt`
pub static RETURN_STMT: [Slot; 1] = [Slot::list(K::ReturnStmt, "results", EXPR, Tolerated)];

/// `BranchStmt`
pub static BRANCH_STMT: [Slot; 1] = [Slot::optional(K::BranchStmt, "label", IDENT)];

/// `BlockStmt`
pub static BLOCK_STMT: [Slot; 1] = [Slot::list(K::BlockStmt, "list", STMT, Tolerated)];

/// `IfStmt`
pub static IF_STMT: [Slot; 4] = [
    Slot::optional(K::IfStmt, "init", STMT),
    Slot::required(K::IfStmt, "cond", EXPR),
    Slot::required(K::IfStmt, "body", BLOCK),
    Slot::optional(K::IfStmt, "else", STMT),
];

/// `CaseClause`
pub static CASE_CLAUSE: [Slot; 2] = [
    Slot::list(K::CaseClause, "list", EXPR, Tolerated),
    Slot::list(K::CaseClause, "body", STMT, Tolerated),
];

/// `SwitchStmt`
pub static SWITCH_STMT: [Slot; 3] = [
    Slot::optional(K::SwitchStmt, "init", STMT),
    Slot::optional(K::SwitchStmt, "tag", EXPR),
    Slot::required(K::SwitchStmt, "body", BLOCK),
];

/// `TypeSwitchStmt`
pub static TYPE_SWITCH_STMT: [Slot; 3] = [
    Slot::optional(K::TypeSwitchStmt, "init", STMT),
    Slot::required(K::TypeSwitchStmt, "assign", STMT),
    Slot::required(K::TypeSwitchStmt, "body", BLOCK),
];

/// `CommClause`
pub static COMM_CLAUSE: [Slot; 2] = [
    Slot::optional(K::CommClause, "comm", STMT),
    Slot::list(K::CommClause, "body", STMT, Tolerated),
];

/// `SelectStmt`
pub static SELECT_STMT: [Slot; 1] = [Slot::required(K::SelectStmt, "body", BLOCK)];

/// `ForStmt`
pub static FOR_STMT: [Slot; 4] = [
    Slot::optional(K::ForStmt, "init", STMT),
    Slot::optional(K::ForStmt, "cond", EXPR),
    Slot::optional(K::ForStmt, "post", STMT),
    Slot::required(K::ForStmt, "body", BLOCK),
];

/// `RangeStmt`
pub static RANGE_STMT: [Slot; 4] = [
    Slot::optional(K::RangeStmt, "key", EXPR),
    Slot::optional(K::RangeStmt, "value", EXPR),
    Slot::required(K::RangeStmt, "x", EXPR),
    Slot::required(K::RangeStmt, "body", BLOCK),
];

// =============================================================================
// Specifications and declarations
// =============================================================================

/// `ImportSpec`
pub static IMPORT_SPEC: [Slot; 4] = [
    Slot::optional(K::ImportSpec, "doc", GROUP),
    Slot::optional(K::ImportSpec, "name", IDENT),
    Slot::required(K::ImportSpec, "path", LIT),
    Slot::optional(K::ImportSpec, "comment", GROUP),
];

/// `ValueSpec`
pub static VALUE_SPEC: [Slot; 5] = [
    Slot::optional(K::ValueSpec, "doc", GROUP),
    Slot::list(K::ValueSpec, "names", IDENT, Cascades),
    Slot::optional(K::ValueSpec, "type", EXPR),
    Slot::list(K::ValueSpec, "values", EXPR, Tolerated),
    Slot::optional(K::ValueSpec, "comment", GROUP),
];

/// `TypeSpec`
pub static TYPE_SPEC: [Slot; 4] = [
    Slot::optional(K::TypeSpec, "doc", GROUP),
    Slot::required(K::TypeSpec, "name", IDENT),
    Slot::required(K::TypeSpec, "type", EXPR),
    Slot::optional(K::TypeSpec, "comment", GROUP),
];

/// `GenDecl`
pub static GEN_DECL: [Slot; 2] = [
    Slot::optional(K::GenDecl, "doc", GROUP),
    Slot::list(K::GenDecl, "specs", SlotType::Spec, Cascades),
];

/// `FuncDecl`
pub static FUNC_DECL: [Slot; 5] = [
    Slot::optional(K::FuncDecl, "doc", GROUP),
    Slot::optional(K::FuncDecl, "recv", FIELDS),
    Slot::required(K::FuncDecl, "name", IDENT),
    Slot::required(K::FuncDecl, "type", FUNC_TYPE),
    Slot::optional(K::FuncDecl, "body", BLOCK),
];

// =============================================================================
// Files
// =============================================================================

/// `File`
pub static FILE: [Slot; 3] = [
    Slot::optional(K::File, "doc", GROUP),
    Slot::required(K::File, "name", IDENT),
    Slot::list(K::File, "decls", SlotType::Decl, Tolerated),
];

/// `Package`
pub static PACKAGE: [Slot; 1] = [Slot::list(
    K::Package,
    "files",
    SlotType::Kind(K::File),
    Tolerated,
)];

/// Returns the ordered child slots of a node kind.
///
/// Leaf kinds have no slots.
#[must_use]
pub fn slots(kind: NodeKind) -> &'static [Slot] {
    match kind {
        K::Comment
        | K::Ident
        | K::BasicLit
        | K::BadExpr
        | K::BadStmt
        | K::EmptyStmt
        | K::BadDecl => &[],
        K::CommentGroup => &COMMENT_GROUP,
        K::Field => &FIELD,
        K::FieldList => &FIELD_LIST,
        K::Ellipsis => &ELLIPSIS,
        K::FuncLit => &FUNC_LIT,
        K::CompositeLit => &COMPOSITE_LIT,
        K::ParenExpr => &PAREN_EXPR,
        K::SelectorExpr => &SELECTOR_EXPR,
        K::IndexExpr => &INDEX_EXPR,
        K::SliceExpr => &SLICE_EXPR,
        K::TypeAssertExpr => &TYPE_ASSERT_EXPR,
        K::CallExpr => &CALL_EXPR,
        K::StarExpr => &STAR_EXPR,
        K::UnaryExpr => &UNARY_EXPR,
        K::BinaryExpr => &BINARY_EXPR,
        K::KeyValueExpr => &KEY_VALUE_EXPR,
        K::ArrayType => &ARRAY_TYPE,
        K::StructType => &STRUCT_TYPE,
        K::FuncType => &FUNC_TYPE_SLOTS,
        K::InterfaceType => &INTERFACE_TYPE,
        K::MapType => &MAP_TYPE,
        K::ChanType => &CHAN_TYPE,
        K::DeclStmt => &DECL_STMT,
        K::LabeledStmt => &LABELED_STMT,
        K::ExprStmt => &EXPR_STMT,
        K::SendStmt => &SEND_STMT,
        K::IncDecStmt => &INC_DEC_STMT,
        K::AssignStmt => &ASSIGN_STMT,
        K::GoStmt => &GO_STMT,
        K::DeferStmt => &DEFER_STMT,
        K::ReturnStmt => &RETURN_STMT,
        K::BranchStmt => &BRANCH_STMT,
        K::BlockStmt => &BLOCK_STMT,
        K::IfStmt => &IF_STMT,
        K::CaseClause => &CASE_CLAUSE,
        K::SwitchStmt => &SWITCH_STMT,
        K::TypeSwitchStmt => &TYPE_SWITCH_STMT,
        K::CommClause => &COMM_CLAUSE,
        K::SelectStmt => &SELECT_STMT,
        K::ForStmt => &FOR_STMT,
        K::RangeStmt => &RANGE_STMT,
        K::ImportSpec => &IMPORT_SPEC,
        K::ValueSpec => &VALUE_SPEC,
        K::TypeSpec => &TYPE_SPEC,
        K::GenDecl => &GEN_DECL,
        K::FuncDecl => &FUNC_DECL,
        K::File => &FILE,
        K::Package => &PACKAGE,
    }
}

/// Looks up a slot by owner kind and name.
#[must_use]
pub fn slot(kind: NodeKind, name: &str) -> Option<&'static Slot> {
    slots(kind).iter().find(|slot| slot.name == name)
}
