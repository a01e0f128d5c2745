//! The raw formula tree produced by parsing, before identifiers are stamped.

use std::ops;

use super::op::{BinaryOp, Constant, UnaryOp};

/// A node in a freshly parsed formula tree. Carries no identity or selection
/// state; adoption (see [`crate::adopt`]) stamps a raw tree into a
/// [`Node`](crate::Node) tree.
#[derive(PartialEq, Debug, Clone)]
pub enum RawNode {
    /// A binary operation over exactly two children.
    Binary(BinaryOp, Box<RawNode>, Box<RawNode>),

    /// A unary operation over exactly one child.
    Unary(UnaryOp, Box<RawNode>),

    /// A function call with a name and an ordered argument list, possibly
    /// empty.
    Call(String, Vec<RawNode>),

    /// A number literal.
    Number(f64),

    /// A reference to a named variable.
    Variable(String),

    /// A symbolic constant.
    Constant(Constant),
}

impl RawNode {
    pub fn binary(op: BinaryOp, left: RawNode, right: RawNode) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn unary(op: UnaryOp, expr: RawNode) -> Self {
        Self::Unary(op, Box::new(expr))
    }

    pub fn call(name: impl Into<String>, args: Vec<RawNode>) -> Self {
        Self::Call(name.into(), args)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Wraps the given tree in grouping parentheses.
    pub fn parens(expr: RawNode) -> Self {
        Self::unary(UnaryOp::Paren, expr)
    }
}

impl ops::Add for RawNode {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Add, self, rhs)
    }
}

impl ops::Sub for RawNode {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Sub, self, rhs)
    }
}

impl ops::Mul for RawNode {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Mul, self, rhs)
    }
}

impl ops::Div for RawNode {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Div, self, rhs)
    }
}

impl ops::Neg for RawNode {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::unary(UnaryOp::Negate, self)
    }
}
