use strum::Display;

/// A binary operator which may appear in a formula tree. The `Display`
/// implementation yields the operator's source symbol.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Display)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "^")]
    Pow,
}

impl BinaryOp {
    /// Precedence rank used for parenthesization decisions; higher binds
    /// tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// True for operators whose right operand must keep explicit grouping at
    /// equal precedence: `10 - (5 - 2)` is not `10 - 5 - 2`.
    pub fn right_sensitive(&self) -> bool {
        matches!(self, Self::Sub | Self::Div)
    }
}

/// A unary operator. `Negate` negates its child; `Paren` only groups it.
/// The two share the single-owned-child shape and nothing else: deletion
/// treats them identically, rendering does not.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum UnaryOp {
    Negate,
    Paren,
}

/// A symbolic constant with no payload. The `Display` implementation yields
/// the constant's source token.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Display)]
pub enum Constant {
    #[strum(serialize = "pi")]
    Pi,
    #[strum(serialize = "e")]
    E,
}
