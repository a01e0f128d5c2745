//! Shared builders and lookups for the test suite.

use crate::node::stamped::{Node, NodeId, NodeKind};

macro_rules! num {
    ($v:literal) => {
        crate::node::raw::RawNode::Number($v as f64)
    };
}

macro_rules! var {
    ($name:ident) => {
        crate::node::raw::RawNode::Variable(stringify!($name).into())
    };
}

macro_rules! call {
    ($name:literal $(, $arg:expr)* $(,)?) => {
        crate::node::raw::RawNode::Call($name.into(), vec![$($arg),*])
    };
}

macro_rules! neg {
    ($expr:expr) => {
        crate::node::raw::RawNode::unary(crate::node::op::UnaryOp::Negate, $expr)
    };
}

macro_rules! parens {
    ($expr:expr) => {
        crate::node::raw::RawNode::unary(crate::node::op::UnaryOp::Paren, $expr)
    };
}

macro_rules! constant {
    (pi) => {
        crate::node::raw::RawNode::Constant(crate::node::op::Constant::Pi)
    };
    (e) => {
        crate::node::raw::RawNode::Constant(crate::node::op::Constant::E)
    };
}

/// First node (pre-order) satisfying the predicate.
pub fn find<'a>(tree: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    if pred(tree) {
        return Some(tree);
    }
    tree.children().into_iter().find_map(|child| find(child, pred))
}

/// Identifier of the first node (pre-order) holding the given number literal.
pub fn id_of_number(tree: &Node, value: f64) -> NodeId {
    find(tree, &|node| matches!(node.kind, NodeKind::Number(v) if v == value))
        .expect("no such number in tree")
        .id
        .clone()
}

/// Every identifier in the tree, pre-order.
pub fn all_ids(tree: &Node) -> Vec<NodeId> {
    let mut ids = vec![tree.id.clone()];
    for child in tree.children() {
        ids.extend(all_ids(child));
    }
    ids
}

/// Number of nodes currently selected.
pub fn selected_count(tree: &Node) -> usize {
    usize::from(tree.selected)
        + tree
            .children()
            .into_iter()
            .map(selected_count)
            .sum::<usize>()
}
