//! Structural mutation of the current tree: selection and deletion.
//!
//! Every operation here is a pure whole-tree rebuild: the input tree is left
//! untouched and a new tree value is returned, so the caller's "current tree"
//! reference can be swapped atomically. Identifier misses are no-ops, never
//! errors.

use crate::node::stamped::{Node, NodeId, NodeKind};

impl Node {
    /// Returns a tree identical to this one except that the node with the
    /// given identifier (if any) is selected and every other node is
    /// deselected. `None` clears the selection; an unmatched identifier
    /// leaves nothing selected.
    pub fn select(&self, target: Option<&NodeId>) -> Node {
        let kind = match &self.kind {
            NodeKind::Binary { op, left, right } => NodeKind::Binary {
                op: *op,
                left: Box::new(left.select(target)),
                right: Box::new(right.select(target)),
            },
            NodeKind::Unary { op, expr } => NodeKind::Unary {
                op: *op,
                expr: Box::new(expr.select(target)),
            },
            NodeKind::Call { name, args } => NodeKind::Call {
                name: name.clone(),
                args: args.iter().map(|arg| arg.select(target)).collect(),
            },
            NodeKind::Number(value) => NodeKind::Number(*value),
            NodeKind::Variable(name) => NodeKind::Variable(name.clone()),
            NodeKind::Constant(constant) => NodeKind::Constant(*constant),
        };

        Node {
            id: self.id.clone(),
            selected: target == Some(&self.id),
            kind,
        }
    }

    /// Removes the node with the given identifier, keeping the tree
    /// well-formed:
    ///
    /// - the root, or an identifier this tree does not carry, is a no-op;
    /// - a binary operation collapses to its surviving operand;
    /// - a unary operation is replaced wholesale by a placeholder `0`, so no
    ///   dangling operator is left behind;
    /// - a call argument is removed from the argument list, and a placeholder
    ///   `0` argument is reinserted if the list would otherwise become empty.
    ///
    /// A successful deletion clears the selection.
    pub fn delete(&self, id: &NodeId) -> Node {
        if &self.id == id {
            return self.clone();
        }

        let (tree, removed) = remove(self, id);
        if removed {
            tree.select(None)
        } else {
            tree
        }
    }
}

/// Rebuilds `node` with the target removed, reporting whether the target was
/// found anywhere in the subtree. Collapse decisions are made at the parent
/// of the matching node, so the match checks run against each child before
/// recursing into it.
fn remove(node: &Node, id: &NodeId) -> (Node, bool) {
    match &node.kind {
        NodeKind::Binary { op, left, right } => {
            if &left.id == id {
                return (right.as_ref().clone(), true);
            }
            if &right.id == id {
                return (left.as_ref().clone(), true);
            }

            let (new_left, removed) = remove(left, id);
            if removed {
                let kind = NodeKind::Binary {
                    op: *op,
                    left: Box::new(new_left),
                    right: right.clone(),
                };
                return (rebuilt(node, kind), true);
            }

            let (new_right, removed) = remove(right, id);
            let kind = NodeKind::Binary {
                op: *op,
                left: Box::new(new_left),
                right: Box::new(new_right),
            };
            (rebuilt(node, kind), removed)
        }

        NodeKind::Unary { op, expr } => {
            if &expr.id == id {
                return (placeholder(&node.id), true);
            }

            let (new_expr, removed) = remove(expr, id);
            let kind = NodeKind::Unary {
                op: *op,
                expr: Box::new(new_expr),
            };
            (rebuilt(node, kind), removed)
        }

        NodeKind::Call { name, args } => {
            if let Some(position) = args.iter().position(|arg| &arg.id == id) {
                let mut new_args: Vec<Node> = args
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != position)
                    .map(|(_, arg)| arg.clone())
                    .collect();

                // A call which had arguments must keep at least one.
                if new_args.is_empty() {
                    new_args.push(placeholder(&node.id));
                }

                let kind = NodeKind::Call {
                    name: name.clone(),
                    args: new_args,
                };
                return (rebuilt(node, kind), true);
            }

            let mut removed = false;
            let new_args: Vec<Node> = args
                .iter()
                .map(|arg| {
                    if removed {
                        return arg.clone();
                    }
                    let (new_arg, hit) = remove(arg, id);
                    removed |= hit;
                    new_arg
                })
                .collect();

            let kind = NodeKind::Call {
                name: name.clone(),
                args: new_args,
            };
            (rebuilt(node, kind), removed)
        }

        NodeKind::Number(_) | NodeKind::Variable(_) | NodeKind::Constant(_) => {
            (node.clone(), false)
        }
    }
}

fn rebuilt(node: &Node, kind: NodeKind) -> Node {
    Node {
        id: node.id.clone(),
        selected: node.selected,
        kind,
    }
}

/// A `Number(0)` stand-in for a deleted operand. Its identifier is minted
/// from the surviving parent's, which cannot collide: the only other node
/// that identifier could have belonged to was discarded by this same
/// deletion.
fn placeholder(parent: &NodeId) -> Node {
    Node {
        id: NodeId(format!("{}.ph", parent.0)),
        selected: false,
        kind: NodeKind::Number(0.0),
    }
}
