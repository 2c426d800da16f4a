//! Internal storage entries for [`ActivityMap`](super::ActivityMap).

use super::NodeIx;

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry {
    pub(in crate::graph) id: String,
    pub(in crate::graph) next: Vec<NodeIx>,
    pub(in crate::graph) prev: Vec<NodeIx>,
}
