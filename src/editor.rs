//! The single owner of the "current tree + current selection" pair.
//!
//! Every mutation swaps the whole tree snapshot for a freshly built one;
//! readers (text, diagnostics, descriptions, metrics) pull from the current
//! snapshot on demand. The editor is single-threaded and synchronous — a
//! caller sharing it across threads must serialize access to the snapshot.

use log::debug;

use crate::error::ParseError;
use crate::node::raw::RawNode;
use crate::node::stamped::{Node, NodeId};
use crate::parse::parse;
use crate::render::render;
use crate::validate::validate;

/// Owns the one live formula tree and applies commands against it.
#[derive(Debug, Default, Clone)]
pub struct Editor {
    tree: Option<Node>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses formula text and adopts the result as the current tree,
    /// replacing it wholesale. On a parse failure the current tree is
    /// cleared, never left partially updated.
    pub fn load(&mut self, source: &str) -> Result<(), ParseError> {
        match parse(source) {
            Ok(raw) => {
                self.adopt_raw(raw);
                Ok(())
            }
            Err(err) => {
                debug!("parse failed, clearing current tree: {err}");
                self.tree = None;
                Err(err)
            }
        }
    }

    /// Adopts an externally produced raw tree as the current tree.
    pub fn adopt_raw(&mut self, raw: RawNode) {
        let tree = raw.adopt();
        debug!("adopted tree with {} node(s)", tree.node_count());
        self.tree = Some(tree);
    }

    /// Discards the current tree, along with its selection.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Read-only view of the current tree.
    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    /// Selects the node with the given identifier; `None` clears the
    /// selection. An identifier the tree does not carry leaves nothing
    /// selected.
    pub fn select(&mut self, id: Option<&NodeId>) {
        if let Some(tree) = &self.tree {
            self.tree = Some(tree.select(id));
        }
    }

    /// Deletes the node with the given identifier, keeping the tree
    /// well-formed. The root and unknown identifiers are ignored.
    pub fn delete(&mut self, id: &NodeId) {
        if let Some(tree) = &self.tree {
            debug!("deleting node {id}");
            self.tree = Some(tree.delete(id));
        }
    }

    /// The currently selected node, if any.
    pub fn selected_node(&self) -> Option<&Node> {
        self.tree.as_ref()?.selected_node()
    }

    /// The formula text for the current tree; empty when there is none.
    pub fn render(&self) -> String {
        render(self.tree.as_ref())
    }

    /// Structural diagnostics for the current tree.
    pub fn diagnostics(&self) -> Vec<String> {
        self.tree.as_ref().map(validate).unwrap_or_default()
    }

    /// Total node count of the current tree; 0 when there is none.
    pub fn node_count(&self) -> usize {
        self.tree.as_ref().map(Node::node_count).unwrap_or(0)
    }

    /// Depth of the current tree; 0 when there is none.
    pub fn tree_depth(&self) -> usize {
        self.tree.as_ref().map(Node::depth).unwrap_or(0)
    }
}
