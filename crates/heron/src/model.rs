//! Layout output types.
//!
//! Coordinates are abstract grid units: `depth` is the layer index along the primary axis and
//! `offset` the slot within a layer. Mapping them to pixels is left to the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub depth: u32,
    pub offset: u32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        depth: 0,
        offset: 0,
    };

    pub fn new(depth: u32, offset: u32) -> Self {
        Self { depth, offset }
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.depth.abs_diff(other.depth) + self.offset.abs_diff(other.offset)
    }
}

/// Ordered waypoints from a parent's position to a child's position.
pub type Polyline = Vec<Position>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub next: Vec<String>,
    pub depth: u32,
    pub offset: u32,
    /// Leaf count below this node; only the tree engine fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub parents: Vec<String>,
    /// One polyline per entry of `parents`, in the same order.
    pub edges: Vec<Polyline>,
}

impl LayoutNode {
    pub fn position(&self) -> Position {
        Position::new(self.depth, self.offset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
}

impl LayoutResult {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.node(id).map(LayoutNode::position)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest depth and offset in use, or `None` for an empty result.
    pub fn extent(&self) -> Option<Position> {
        let max_depth = self.nodes.iter().map(|n| n.depth).max()?;
        let max_offset = self.nodes.iter().map(|n| n.offset).max()?;
        Some(Position::new(max_depth, max_offset))
    }
}
