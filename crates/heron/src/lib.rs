#![forbid(unsafe_code)]

//! Headless layout engines for activity maps.
//!
//! Given a root, `heron` assigns every reachable node a `(depth, offset)` grid position and routes
//! every incoming edge as an axis-aligned polyline between grid positions. Two engines are
//! available: [`algo::orthogonal`] for maps with merging branches and [`algo::tree`] for
//! tree-shaped maps. The input [`ActivityMap`] is only borrowed; all layout state lives in a per-call
//! side table.

pub mod algo;
pub mod document;
pub mod error;
pub mod model;
pub mod state;
pub mod validate;
pub mod width;

pub use algo::{Algorithm, OrthogonalOptions, TreeOptions};
pub use document::{MapDocument, NodeDocument};
pub use error::{Error, Result};
pub use heron_graph as graph;
pub use heron_graph::{ActivityMap, NodeIx};
pub use model::{LayoutNode, LayoutResult, Polyline, Position};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lays out the part of `map` reachable from `root` with the selected engine.
pub fn layout(map: &ActivityMap, root: &str, algorithm: Algorithm) -> Result<LayoutResult> {
    match algorithm {
        Algorithm::Orthogonal(opts) => algo::orthogonal::layout(map, root, &opts),
        Algorithm::Tree(opts) => algo::tree::layout(map, root, &opts),
    }
}

/// Parses a [`MapDocument`] and lays it out from its declared root.
pub fn layout_json(text: &str, algorithm: Algorithm) -> Result<LayoutResult> {
    let doc = MapDocument::from_json(text)?;
    let map = doc.to_map()?;
    layout(&map, &doc.root, algorithm)
}
