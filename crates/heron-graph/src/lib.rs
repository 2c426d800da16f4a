#![forbid(unsafe_code)]

//! Activity map container used by `heron`.
//!
//! An activity map is a rooted directed graph where every node carries an ordered list of
//! successors. The container interns node ids into dense [`NodeIx`] handles so layout passes can
//! keep their per-node state in flat side tables instead of writing onto the nodes.

pub mod graph;

pub use graph::{ActivityMap, NodeIx, alg};
