//! Re-serialization of a formula tree to text.
//!
//! Parentheses are inserted only where operator precedence or associativity
//! requires them. The decision for a binary child is made with its *parent's*
//! operator, not its own, so the visitor threads the enclosing operator (and
//! which operand slot is being rendered) through every recursive call; the
//! check runs exactly once, at the call site about to splice the child's text
//! into the parent's.

use itertools::Itertools;

use crate::node::op::{BinaryOp, Constant, UnaryOp};
use crate::node::stamped::{Node, NodeKind};

/// Renders the current tree back to formula text; an absent tree renders as
/// the empty string.
pub fn render(tree: Option<&Node>) -> String {
    match tree {
        Some(node) => render_node(node, None),
        None => String::new(),
    }
}

/// Which operand slot of the enclosing binary operation is being rendered.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Side {
    Left,
    Right,
}

fn render_node(node: &Node, parent: Option<(BinaryOp, Side)>) -> String {
    match &node.kind {
        NodeKind::Binary { op, left, right } => {
            let text = format!(
                "{} {} {}",
                render_node(left, Some((*op, Side::Left))),
                op,
                render_node(right, Some((*op, Side::Right))),
            );
            if needs_parens(*op, parent) {
                format!("({text})")
            } else {
                text
            }
        }

        NodeKind::Unary {
            op: UnaryOp::Paren,
            expr,
        } => format!("({})", render_node(expr, None)),

        NodeKind::Unary {
            op: UnaryOp::Negate,
            expr,
        } => {
            // A negated binary operation is always wrapped, so the sign can
            // never be misread as binding to the left operand only.
            if matches!(expr.kind, NodeKind::Binary { .. }) {
                format!("-({})", render_node(expr, None))
            } else {
                format!("-{}", render_node(expr, None))
            }
        }

        NodeKind::Call { name, args } => format!(
            "{}({})",
            name,
            args.iter().map(|arg| render_node(arg, None)).join(", "),
        ),

        NodeKind::Number(value) => render_number(*value),

        NodeKind::Variable(name) => {
            if name.starts_with('$') {
                name.clone()
            } else {
                format!("${name}")
            }
        }

        NodeKind::Constant(constant) => constant.to_string(),
    }
}

/// A binary child takes parentheses when its operator binds more loosely than
/// the enclosing one, or binds equally while sitting in the right operand
/// slot of `-` or `/`. Unary, call, and leaf parents supply their own
/// delimiters and never wrap from here.
fn needs_parens(child: BinaryOp, parent: Option<(BinaryOp, Side)>) -> bool {
    let Some((parent_op, side)) = parent else {
        return false;
    };

    child.precedence() < parent_op.precedence()
        || (child.precedence() == parent_op.precedence()
            && parent_op.right_sensitive()
            && side == Side::Right)
}

/// Integral values print without a fractional part; anything else with
/// exactly two decimal digits.
fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// One-line human-readable label for a node, for diagnostics and UI
/// affordances.
pub fn describe(node: &Node) -> String {
    match &node.kind {
        NodeKind::Binary { op, .. } => match op {
            BinaryOp::Add => "addition operation".into(),
            BinaryOp::Sub => "subtraction operation".into(),
            BinaryOp::Mul => "multiplication operation".into(),
            BinaryOp::Div => "division operation".into(),
            BinaryOp::Pow => "exponentiation operation".into(),
        },
        NodeKind::Unary {
            op: UnaryOp::Negate,
            ..
        } => "negation".into(),
        NodeKind::Unary {
            op: UnaryOp::Paren, ..
        } => "parenthesised group".into(),
        NodeKind::Call { name, args } => {
            format!("{} function with {} argument(s)", name, args.len())
        }
        NodeKind::Number(value) => format!("number: {}", render_number(*value)),
        NodeKind::Variable(name) => format!("variable: {name}"),
        NodeKind::Constant(Constant::Pi) => "constant: π".into(),
        NodeKind::Constant(Constant::E) => "constant: e".into(),
    }
}
