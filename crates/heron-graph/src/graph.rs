//! The [`ActivityMap`] container plus the traversal helpers in [`alg`].

use rustc_hash::FxBuildHasher;

mod entries;

pub mod alg;

use entries::NodeEntry;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Dense handle of a node inside one [`ActivityMap`].
///
/// Handles are assigned in insertion order and stay valid for the lifetime of the map (nodes are
/// never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Directed activity graph: nodes keyed by a unique id, each with an ordered successor list.
///
/// Successor edges are keyed by `(v, w)`; adding an edge that already exists keeps the original
/// position in `v`'s successor list.
#[derive(Debug, Clone, Default)]
pub struct ActivityMap {
    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,
    edge_count: usize,
}

impl ActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Returns the handle for `id`, inserting a leaf node if it is not present yet.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> NodeIx {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            return NodeIx(idx);
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            next: Vec::new(),
            prev: Vec::new(),
        });
        self.node_index.insert(id, idx);
        NodeIx(idx)
    }

    pub fn set_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.ensure_node(id);
        self
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied().map(NodeIx)
    }

    /// Id of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` was produced by a different map.
    pub fn id(&self, v: NodeIx) -> &str {
        self.nodes[v.0].id.as_str()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ixs(&self) -> impl Iterator<Item = NodeIx> + '_ {
        (0..self.nodes.len()).map(NodeIx)
    }

    /// Appends `w` to `v`'s successor list, creating either node if needed.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        let v = self.ensure_node(v);
        let w = self.ensure_node(w);
        self.link(v, w);
        self
    }

    /// Adds `v -> w` for each consecutive pair of `nodes`.
    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        if nodes.len() < 2 {
            if let Some(v) = nodes.first() {
                self.ensure_node(*v);
            }
            return self;
        }
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    /// Adds `v -> w` for every `w` in `next`, in order.
    pub fn set_next<I, S>(&mut self, v: impl Into<String>, next: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let v = self.ensure_node(v);
        for w in next {
            let w = self.ensure_node(w);
            self.link(v, w);
        }
        self
    }

    fn link(&mut self, v: NodeIx, w: NodeIx) {
        if self.nodes[v.0].next.contains(&w) {
            return;
        }
        self.nodes[v.0].next.push(w);
        self.nodes[w.0].prev.push(v);
        self.edge_count += 1;
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        let (Some(v), Some(w)) = (self.node_ix(v), self.node_ix(w)) else {
            return false;
        };
        self.nodes[v.0].next.contains(&w)
    }

    /// Ordered successors of `v`.
    pub fn next(&self, v: NodeIx) -> &[NodeIx] {
        &self.nodes[v.0].next
    }

    /// Predecessors of `v`, in the order the edges were added.
    pub fn prev(&self, v: NodeIx) -> &[NodeIx] {
        &self.nodes[v.0].prev
    }

    pub fn is_leaf(&self, v: NodeIx) -> bool {
        self.nodes[v.0].next.is_empty()
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(v) = self.node_ix(v) else {
            return Vec::new();
        };
        self.next(v).iter().map(|&w| self.id(w)).collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(v) = self.node_ix(v) else {
            return Vec::new();
        };
        self.prev(v).iter().map(|&u| self.id(u)).collect()
    }

    /// Nodes without incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.prev.is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }
}
