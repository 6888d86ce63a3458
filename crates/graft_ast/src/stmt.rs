//! Statement nodes.

use crate::decl::Decl;
use crate::expr::{CallExpr, Expr, Ident};
use crate::node::NodeKind;
use crate::token::Token;

/// A statement node.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Stmt {
    /// Placeholder for a statement that could not be parsed.
    #[default]
    Bad,
    /// Declaration in statement position like `var x int`
    Decl(Box<DeclStmt>),
    /// Implicit `;` or empty statement
    Empty,
    /// Labeled statement like `loop: for { ... }`
    Labeled(Box<LabeledStmt>),
    /// Standalone expression like `f()`
    Expr(Box<ExprStmt>),
    /// Channel send like `ch <- v`
    Send(Box<SendStmt>),
    /// `x++` or `x--`
    IncDec(Box<IncDecStmt>),
    /// Assignment or short variable declaration
    Assign(Box<AssignStmt>),
    /// `go f()`
    Go(Box<GoStmt>),
    /// `defer f()`
    Defer(Box<DeferStmt>),
    /// `return a, b`
    Return(Box<ReturnStmt>),
    /// `break`, `continue`, `goto`, or `fallthrough`
    Branch(Box<BranchStmt>),
    /// Braced statement list
    Block(Box<BlockStmt>),
    /// `if` statement
    If(Box<IfStmt>),
    /// `case` or `default` clause of an expression or type switch
    CaseClause(Box<CaseClause>),
    /// Expression switch
    Switch(Box<SwitchStmt>),
    /// Type switch
    TypeSwitch(Box<TypeSwitchStmt>),
    /// `case` or `default` clause of a select
    CommClause(Box<CommClause>),
    /// `select` statement
    Select(Box<SelectStmt>),
    /// `for` loop
    For(Box<ForStmt>),
    /// `for ... range` loop
    Range(Box<RangeStmt>),
}

impl Stmt {
    /// Returns the kind tag of this statement.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Bad => NodeKind::BadStmt,
            Self::Decl(_) => NodeKind::DeclStmt,
            Self::Empty => NodeKind::EmptyStmt,
            Self::Labeled(_) => NodeKind::LabeledStmt,
            Self::Expr(_) => NodeKind::ExprStmt,
            Self::Send(_) => NodeKind::SendStmt,
            Self::IncDec(_) => NodeKind::IncDecStmt,
            Self::Assign(_) => NodeKind::AssignStmt,
            Self::Go(_) => NodeKind::GoStmt,
            Self::Defer(_) => NodeKind::DeferStmt,
            Self::Return(_) => NodeKind::ReturnStmt,
            Self::Branch(_) => NodeKind::BranchStmt,
            Self::Block(_) => NodeKind::BlockStmt,
            Self::If(_) => NodeKind::IfStmt,
            Self::CaseClause(_) => NodeKind::CaseClause,
            Self::Switch(_) => NodeKind::SwitchStmt,
            Self::TypeSwitch(_) => NodeKind::TypeSwitchStmt,
            Self::CommClause(_) => NodeKind::CommClause,
            Self::Select(_) => NodeKind::SelectStmt,
            Self::For(_) => NodeKind::ForStmt,
            Self::Range(_) => NodeKind::RangeStmt,
        }
    }

    /// Creates an expression statement.
    #[must_use]
    pub fn expr(x: Expr) -> Self {
        ExprStmt { x }.into()
    }

    /// Creates an assignment with the given operator.
    #[must_use]
    pub fn assign(lhs: Vec<Expr>, tok: Token, rhs: Vec<Expr>) -> Self {
        AssignStmt { lhs, tok, rhs }.into()
    }

    /// Creates a return statement.
    #[must_use]
    pub fn ret(results: Vec<Expr>) -> Self {
        ReturnStmt { results }.into()
    }

    /// Creates a block statement.
    #[must_use]
    pub fn block(list: Vec<Stmt>) -> Self {
        BlockStmt::new(list).into()
    }
}

/// A declaration in statement position.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeclStmt {
    /// The declaration; a `GenDecl` with `const`, `type`, or `var`.
    pub decl: Decl,
}

/// A labeled statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LabeledStmt {
    /// Label.
    pub label: Ident,
    /// Labeled statement.
    pub stmt: Stmt,
}

/// A standalone expression.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExprStmt {
    /// Expression.
    pub x: Expr,
}

/// A channel send.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SendStmt {
    /// Channel.
    pub chan: Expr,
    /// Sent value.
    pub value: Expr,
}

/// An increment or decrement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncDecStmt {
    /// Operand.
    pub x: Expr,
    /// [`Token::Inc`] or [`Token::Dec`].
    pub tok: Token,
}

/// An assignment or short variable declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignStmt {
    /// Assigned operands.
    pub lhs: Vec<Expr>,
    /// Assignment operator.
    pub tok: Token,
    /// Assigned values.
    pub rhs: Vec<Expr>,
}

/// A `go` statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GoStmt {
    /// Started call.
    pub call: CallExpr,
}

/// A `defer` statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeferStmt {
    /// Deferred call.
    pub call: CallExpr,
}

/// A `return` statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ReturnStmt {
    /// Result expressions.
    pub results: Vec<Expr>,
}

/// A `break`, `continue`, `goto`, or `fallthrough` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchStmt {
    /// Keyword.
    pub tok: Token,
    /// Target label.
    pub label: Option<Ident>,
}

/// A braced statement list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BlockStmt {
    /// Statements.
    pub list: Vec<Stmt>,
}

impl BlockStmt {
    /// Creates a block.
    #[must_use]
    pub fn new(list: Vec<Stmt>) -> Self {
        Self { list }
    }
}

/// An `if` statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct IfStmt {
    /// Initialization statement.
    pub init: Option<Stmt>,
    /// Condition.
    pub cond: Expr,
    /// Then branch.
    pub body: BlockStmt,
    /// `else` branch: a block or another `if`.
    pub else_branch: Option<Stmt>,
}

/// A `case` or `default` clause of a switch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CaseClause {
    /// Case expressions or types; empty for `default`.
    pub list: Vec<Expr>,
    /// Clause statements.
    pub body: Vec<Stmt>,
}

/// An expression switch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SwitchStmt {
    /// Initialization statement.
    pub init: Option<Stmt>,
    /// Switched-on expression.
    pub tag: Option<Expr>,
    /// Case clauses.
    pub body: BlockStmt,
}

/// A type switch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TypeSwitchStmt {
    /// Initialization statement.
    pub init: Option<Stmt>,
    /// `x := y.(type)` or `y.(type)`.
    pub assign: Stmt,
    /// Case clauses.
    pub body: BlockStmt,
}

/// A `case` or `default` clause of a select.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CommClause {
    /// Send or receive statement; absent for `default`.
    pub comm: Option<Stmt>,
    /// Clause statements.
    pub body: Vec<Stmt>,
}

/// A `select` statement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectStmt {
    /// Comm clauses.
    pub body: BlockStmt,
}

/// A `for` loop.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ForStmt {
    /// Initialization statement.
    pub init: Option<Stmt>,
    /// Loop condition.
    pub cond: Option<Expr>,
    /// Post-iteration statement.
    pub post: Option<Stmt>,
    /// Loop body.
    pub body: BlockStmt,
}

/// A `for ... range` loop.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RangeStmt {
    /// Key variable.
    pub key: Option<Expr>,
    /// Value variable.
    pub value: Option<Expr>,
    /// [`Token::Assign`] or [`Token::Define`]; absent when there is no key.
    pub tok: Option<Token>,
    /// Ranged-over expression.
    pub x: Expr,
    /// Loop body.
    pub body: BlockStmt,
}

crate::boxed_variants! {
    Stmt {
        Decl(DeclStmt),
        Labeled(LabeledStmt),
        Expr(ExprStmt),
        Send(SendStmt),
        IncDec(IncDecStmt),
        Assign(AssignStmt),
        Go(GoStmt),
        Defer(DeferStmt),
        Return(ReturnStmt),
        Branch(BranchStmt),
        Block(BlockStmt),
        If(IfStmt),
        CaseClause(CaseClause),
        Switch(SwitchStmt),
        TypeSwitch(TypeSwitchStmt),
        CommClause(CommClause),
        Select(SelectStmt),
        For(ForStmt),
        Range(RangeStmt),
    }
}
