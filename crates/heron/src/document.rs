//! JSON description of an activity map.
//!
//! ```json
//! { "root": "start", "nodes": [{ "id": "start", "next": ["a", "b"] }, { "id": "a" }, { "id": "b" }] }
//! ```

use crate::error::{Error, Result};
use heron_graph::ActivityMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    pub root: String,
    pub nodes: Vec<NodeDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<String>,
}

impl MapDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the map. Every id referenced from a `next` list must be declared in `nodes`.
    pub fn to_map(&self) -> Result<ActivityMap> {
        let mut map = ActivityMap::new();
        for n in &self.nodes {
            if map.has_node(&n.id) {
                return Err(Error::DuplicateNode { id: n.id.clone() });
            }
            map.set_node(n.id.as_str());
        }
        for n in &self.nodes {
            if let Some(missing) = n.next.iter().find(|w| !map.has_node(w)) {
                return Err(Error::MissingNode {
                    from: n.id.clone(),
                    id: missing.clone(),
                });
            }
            map.set_next(n.id.as_str(), n.next.iter().map(String::as_str));
        }
        Ok(map)
    }

    /// Captures `map` as a document rooted at `root`, listing nodes in insertion order.
    pub fn from_map(map: &ActivityMap, root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            nodes: map
                .node_ixs()
                .map(|v| NodeDocument {
                    id: map.id(v).to_string(),
                    next: map.next(v).iter().map(|&w| map.id(w).to_string()).collect(),
                })
                .collect(),
        }
    }
}
