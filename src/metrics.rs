//! On-demand structural metrics. Nothing here is maintained incrementally;
//! each call walks the current tree.

use crate::node::stamped::{Node, NodeKind};

impl Node {
    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + match &self.kind {
            NodeKind::Binary { left, right, .. } => left.node_count() + right.node_count(),
            NodeKind::Unary { expr, .. } => expr.node_count(),
            NodeKind::Call { args, .. } => args.iter().map(Node::node_count).sum(),
            NodeKind::Number(_) | NodeKind::Variable(_) | NodeKind::Constant(_) => 0,
        }
    }

    /// Length of the longest root-to-leaf path: 1 for a leaf, including a
    /// call with no arguments.
    pub fn depth(&self) -> usize {
        1 + match &self.kind {
            NodeKind::Binary { left, right, .. } => left.depth().max(right.depth()),
            NodeKind::Unary { expr, .. } => expr.depth(),
            NodeKind::Call { args, .. } => {
                args.iter().map(Node::depth).max().unwrap_or(0)
            }
            NodeKind::Number(_) | NodeKind::Variable(_) | NodeKind::Constant(_) => 0,
        }
    }
}
