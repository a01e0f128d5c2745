//! The formula tree data model.
//!
//! Trees exist in two forms: [`raw::RawNode`], the shape produced by parsing,
//! with no identity attached, and [`stamped::Node`], the same closed variant
//! set stamped with per-node identifiers and a selection flag. Adoption
//! (see [`crate::adopt`]) is the only way to turn the former into the latter.

pub mod op;
pub mod raw;
pub mod stamped;
