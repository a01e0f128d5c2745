//! An engine for editing formula trees: adopt a parsed formula as a tree with
//! stable per-node identifiers, mutate it (select, delete, replace) while
//! keeping it well-formed, and serialize it back to text with minimal
//! parenthesization.

pub mod adopt;
pub mod editor;
pub mod error;
pub mod metrics;
pub mod mutate;
pub mod node;
pub mod parse;
pub mod render;
pub mod validate;

#[cfg(test)]
mod tests;

pub use crate::{
    editor::Editor,
    error::ParseError,
    node::{
        op::{BinaryOp, Constant, UnaryOp},
        raw::RawNode,
        stamped::{Node, NodeId, NodeKind},
    },
    parse::parse,
    render::{describe, render},
    validate::validate,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
