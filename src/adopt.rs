//! Adoption of raw parser output into an identifier-stamped tree.
//!
//! Identifiers are built from the node's structural path (`l`/`r` for binary
//! operands, `e` for a unary child, `aN` for call arguments) plus a sequence
//! number local to the adoption walk. The path alone is already unique within
//! one tree; the sequence number keeps identifiers distinct even across trees
//! adopted from structurally identical input.

use crate::node::raw::RawNode;
use crate::node::stamped::{Node, NodeId, NodeKind};

impl RawNode {
    /// Walks this tree top-down, stamping every node with a fresh identifier
    /// and a cleared selection flag. Accepts any well-formed tree; runs in
    /// time proportional to the node count.
    pub fn adopt(self) -> Node {
        Stamper { seq: 0 }.stamp(self, "root".into())
    }
}

struct Stamper {
    seq: u64,
}

impl Stamper {
    fn mint(&mut self, path: &str) -> NodeId {
        let id = NodeId(format!("{path}#{}", self.seq));
        self.seq += 1;
        id
    }

    fn stamp(&mut self, raw: RawNode, path: String) -> Node {
        let id = self.mint(&path);
        let kind = match raw {
            RawNode::Binary(op, left, right) => NodeKind::Binary {
                op,
                left: Box::new(self.stamp(*left, format!("{path}.l"))),
                right: Box::new(self.stamp(*right, format!("{path}.r"))),
            },
            RawNode::Unary(op, expr) => NodeKind::Unary {
                op,
                expr: Box::new(self.stamp(*expr, format!("{path}.e"))),
            },
            RawNode::Call(name, args) => NodeKind::Call {
                name,
                args: args
                    .into_iter()
                    .enumerate()
                    .map(|(index, arg)| self.stamp(arg, format!("{path}.a{index}")))
                    .collect(),
            },
            RawNode::Number(value) => NodeKind::Number(value),
            RawNode::Variable(name) => NodeKind::Variable(name),
            RawNode::Constant(constant) => NodeKind::Constant(constant),
        };

        Node {
            id,
            selected: false,
            kind,
        }
    }
}
