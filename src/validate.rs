//! Structural well-formedness diagnostics.
//!
//! This is not a semantic or type check. The walk visits the whole tree and
//! collects one diagnostic per violation; it never stops at the first problem
//! and never fails. Malformed operand shapes (a binary operation missing a
//! child, a unary operation missing its expression) are unrepresentable in
//! [`NodeKind`], so the checks cover the violations the model can express.

use crate::node::stamped::{Node, NodeKind};

/// Collects a diagnostic message for every structural violation in the tree.
/// An empty result means the tree is well-formed.
pub fn validate(tree: &Node) -> Vec<String> {
    let mut diagnostics = Vec::new();
    check(tree, &mut diagnostics);
    diagnostics
}

fn check(node: &Node, diagnostics: &mut Vec<String>) {
    match &node.kind {
        NodeKind::Binary { left, right, .. } => {
            check(left, diagnostics);
            check(right, diagnostics);
        }

        NodeKind::Unary { expr, .. } => check(expr, diagnostics),

        NodeKind::Call { name, args } => {
            if name.is_empty() {
                diagnostics.push(format!("function node {} has no name", node.id));
            }
            if args.is_empty() {
                diagnostics.push(format!("function node {} has no arguments", node.id));
            }
            for arg in args {
                check(arg, diagnostics);
            }
        }

        NodeKind::Number(value) => {
            if !value.is_finite() {
                diagnostics.push(format!(
                    "number node {} holds a non-finite value",
                    node.id
                ));
            }
        }

        NodeKind::Variable(name) => {
            if name.is_empty() {
                diagnostics.push(format!("variable node {} has no name", node.id));
            }
        }

        NodeKind::Constant(_) => {}
    }
}
