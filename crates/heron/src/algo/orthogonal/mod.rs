//! Orthogonal engine: layered placement that tolerates merge points.
//!
//! Three passes over a per-call [`LayoutState`]:
//!
//! 1. placement (`place`): a queue walk from the root where the first child of a node continues
//!    the parent's row one layer deeper and every later child opens a new row at the bottom of
//!    the drawing. A node reached again through another parent is nudged one slot further and kept
//!    strictly deeper than that parent;
//! 2. leaf compaction (`compact`), optional;
//! 3. edge routing (`route`): elbows by default, flipped (vertical first) when a parent shares the
//!    node's row or the node has more than two parents and the parent's layer has room.
//!
//! Nodes are reported in depth-first preorder.

mod compact;
mod place;
mod route;

use crate::algo::OrthogonalOptions;
use crate::error::Result;
use crate::model::LayoutResult;
use crate::state::{LayoutState, OffsetMap};
use crate::validate::validate;
use heron_graph::{ActivityMap, alg};

use place::PlacementContext;
pub(crate) use route::elbow;

pub fn layout(map: &ActivityMap, root: &str, opts: &OrthogonalOptions) -> Result<LayoutResult> {
    let root = validate(map, root)?;
    let mut state = LayoutState::new(map);

    let mut ctx = PlacementContext::new(map, root);
    let placed = ctx.run(map, &mut state);
    tracing::debug!(placed, total_offset = ctx.total_offset(), "orthogonal placement");

    let order = alg::dfs(map, root);

    if opts.compact_leaves {
        let moved = compact::compact_leaves(map, &order, &mut state, opts.max_leaf_distance);
        tracing::debug!(moved, "leaf compaction");
    }

    let offsets = OffsetMap::build(&state, &order);
    let mut flips = 0;
    let nodes = order
        .iter()
        .map(|&v| {
            let (edges, flipped) = route::route_node(&state, &offsets, v);
            flips += flipped;
            state.to_layout_node(map, v, edges)
        })
        .collect();
    tracing::debug!(flips, "orthogonal edge routing");

    Ok(LayoutResult { nodes })
}
