//! The identity-bearing formula tree operated on by the mutation and
//! serialization engines.

use std::fmt;

use super::op::{BinaryOp, Constant, UnaryOp};

/// A per-node identifier, unique within one adopted tree. Assigned exactly
/// once, at adoption time, and discarded only together with its subtree.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct NodeId(pub(crate) String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

/// One node of the current formula tree: a variant payload plus the identity
/// fields shared by every variant.
///
/// At most one node in a tree has `selected` set; the mutation engine
/// maintains this when rebuilding.
#[derive(PartialEq, Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub selected: bool,
    pub kind: NodeKind,
}

/// The closed set of node variants. Children are exclusively owned, so a tree
/// is always a strict tree; "binary node without a right operand" and similar
/// malformed shapes are unrepresentable.
#[derive(PartialEq, Debug, Clone)]
pub enum NodeKind {
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Node>,
    },
    Call {
        name: String,
        args: Vec<Node>,
    },
    Number(f64),
    Variable(String),
    Constant(Constant),
}

impl Node {
    /// The node's direct children, left to right. Empty for leaves.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::Unary { expr, .. } => vec![expr.as_ref()],
            NodeKind::Call { args, .. } => args.iter().collect(),
            NodeKind::Number(_) | NodeKind::Variable(_) | NodeKind::Constant(_) => Vec::new(),
        }
    }

    /// Pre-order, left-to-right search for the node with the given
    /// identifier. Returns the first structural match, or `None` for an
    /// identifier this tree never carried.
    pub fn node_by_id(&self, id: &NodeId) -> Option<&Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children().into_iter().find_map(|child| child.node_by_id(id))
    }

    /// The currently selected node, if any.
    pub fn selected_node(&self) -> Option<&Node> {
        if self.selected {
            return Some(self);
        }
        self.children().into_iter().find_map(Node::selected_node)
    }
}
