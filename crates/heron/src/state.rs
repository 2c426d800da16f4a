//! Per-call layout state kept beside the input map.
//!
//! Engines never write onto [`ActivityMap`] nodes; every depth/offset/parent link lives here and is
//! dropped when the call returns.

use crate::model::{LayoutNode, Polyline, Position};
use heron_graph::{ActivityMap, NodeIx};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeState {
    pub depth: u32,
    pub offset: Option<u32>,
    pub width: Option<u32>,
    /// Distinct predecessors in discovery order; the first one is the primary parent.
    pub parents: Vec<NodeIx>,
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    nodes: Vec<NodeState>,
}

impl LayoutState {
    pub fn new(map: &ActivityMap) -> Self {
        Self {
            nodes: vec![NodeState::default(); map.node_count()],
        }
    }

    pub fn get(&self, v: NodeIx) -> &NodeState {
        &self.nodes[v.index()]
    }

    pub fn get_mut(&mut self, v: NodeIx) -> &mut NodeState {
        &mut self.nodes[v.index()]
    }

    /// Records `parent` as a predecessor of `child`. Returns `false` if it was already recorded.
    pub fn attach_parent(&mut self, child: NodeIx, parent: NodeIx) -> bool {
        let parents = &mut self.nodes[child.index()].parents;
        if parents.contains(&parent) {
            return false;
        }
        parents.push(parent);
        true
    }

    pub fn position(&self, v: NodeIx) -> Position {
        let n = self.get(v);
        Position::new(n.depth, n.offset.unwrap_or(0))
    }

    pub fn set_position(&mut self, v: NodeIx, pos: Position) {
        let n = self.get_mut(v);
        n.depth = pos.depth;
        n.offset = Some(pos.offset);
    }

    pub fn to_layout_node(&self, map: &ActivityMap, v: NodeIx, edges: Vec<Polyline>) -> LayoutNode {
        let n = self.get(v);
        LayoutNode {
            id: map.id(v).to_string(),
            next: map.next(v).iter().map(|&w| map.id(w).to_string()).collect(),
            depth: n.depth,
            offset: n.offset.unwrap_or(0),
            width: n.width,
            parents: n.parents.iter().map(|&p| map.id(p).to_string()).collect(),
            edges,
        }
    }
}

/// Sorted, distinct offsets in use per depth layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    layers: BTreeMap<u32, Vec<u32>>,
}

impl OffsetMap {
    pub fn build(state: &LayoutState, nodes: &[NodeIx]) -> Self {
        let mut layers: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for &v in nodes {
            let pos = state.position(v);
            layers.entry(pos.depth).or_default().push(pos.offset);
        }
        for offsets in layers.values_mut() {
            offsets.sort_unstable();
            offsets.dedup();
        }
        Self { layers }
    }

    pub fn layer(&self, depth: u32) -> &[u32] {
        self.layers.get(&depth).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Largest offset in `depth` strictly below `offset`.
    pub fn preceding(&self, depth: u32, offset: u32) -> Option<u32> {
        let layer = self.layer(depth);
        let end = layer.partition_point(|&o| o < offset);
        layer[..end].last().copied()
    }

    /// Smallest offset in `depth` strictly above `offset`.
    pub fn following(&self, depth: u32, offset: u32) -> Option<u32> {
        let layer = self.layer(depth);
        let start = layer.partition_point(|&o| o <= offset);
        layer[start..].first().copied()
    }
}
