//! Operator, keyword, and literal tags carried by syntax nodes.

use std::fmt;

/// The lexical class of a [`BasicLit`](crate::BasicLit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LitKind {
    /// Integer literal like `42`
    #[default]
    Int,
    /// Floating-point literal like `1.5`
    Float,
    /// Imaginary literal like `2i`
    Imag,
    /// Rune literal like `'a'`
    Char,
    /// String literal like `"hello"`
    String,
}

impl fmt::Display for LitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Imag => "IMAG",
            Self::Char => "CHAR",
            Self::String => "STRING",
        };
        f.write_str(name)
    }
}

/// Operators and keywords stored on statement, expression, and declaration nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Arithmetic and bitwise operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`
    AndNot,

    // Logical and comparison operators
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    Not,
    /// `==`
    Eql,
    /// `!=`
    Neq,
    /// `<`
    Lss,
    /// `<=`
    Leq,
    /// `>`
    Gtr,
    /// `>=`
    Geq,

    // Channel operator
    /// `<-`
    Arrow,

    // Assignment operators
    /// `=`
    Assign,
    /// `:=`
    Define,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    QuoAssign,
    /// `++`
    Inc,
    /// `--`
    Dec,

    // Branch keywords
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `goto`
    Goto,
    /// `fallthrough`
    Fallthrough,

    // Declaration keywords
    /// `import`
    Import,
    /// `const`
    Const,
    /// `type`
    Type,
    /// `var`
    Var,
}

impl Token {
    /// The source spelling of this token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::Eql => "==",
            Self::Neq => "!=",
            Self::Lss => "<",
            Self::Leq => "<=",
            Self::Gtr => ">",
            Self::Geq => ">=",
            Self::Arrow => "<-",
            Self::Assign => "=",
            Self::Define => ":=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::QuoAssign => "/=",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Goto => "goto",
            Self::Fallthrough => "fallthrough",
            Self::Import => "import",
            Self::Const => "const",
            Self::Type => "type",
            Self::Var => "var",
        }
    }

    /// Returns true for the assignment family (`=`, `:=`, `+=`, ...).
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::Define
                | Self::AddAssign
                | Self::SubAssign
                | Self::MulAssign
                | Self::QuoAssign
        )
    }

    /// Returns true for the keywords that open a general declaration.
    #[must_use]
    pub const fn is_decl_keyword(self) -> bool {
        matches!(self, Self::Import | Self::Const | Self::Type | Self::Var)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a channel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}
