//! Tree engine: breadth-first placement that reserves one slot per leaf below each node.
//!
//! A node sits one layer below its shallowest parent. The first time a node is placed it takes
//! the next free slot of its layer (never above any parent's slot) and reserves `width` slots for
//! its subtree. Edges are plain elbows. Nodes are reported in breadth-first order.

use crate::algo::TreeOptions;
use crate::algo::orthogonal::elbow;
use crate::error::Result;
use crate::model::LayoutResult;
use crate::state::LayoutState;
use crate::validate::validate;
use crate::width::set_widths;
use heron_graph::{ActivityMap, NodeIx, alg};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub fn layout(map: &ActivityMap, root: &str, opts: &TreeOptions) -> Result<LayoutResult> {
    let root = validate(map, root)?;
    let mut state = LayoutState::new(map);

    set_widths(map, root, &mut state);
    let visits = place(map, root, &mut state, opts);
    tracing::debug!(visits, "tree placement");

    let nodes = alg::bfs(map, root)
        .into_iter()
        .map(|v| {
            let to = state.position(v);
            let edges = state
                .get(v)
                .parents
                .iter()
                .map(|&p| elbow(state.position(p), to))
                .collect();
            state.to_layout_node(map, v, edges)
        })
        .collect();

    Ok(LayoutResult { nodes })
}

/// Breadth-first placement. Returns the number of dequeued entries.
///
/// A node dequeued again (reached through another parent) re-derives its depth but keeps its
/// slot; its children are queued again only when that depth changed.
pub(crate) fn place(
    map: &ActivityMap,
    root: NodeIx,
    state: &mut LayoutState,
    opts: &TreeOptions,
) -> usize {
    let mut next_slot: FxHashMap<u32, u32> = FxHashMap::default();
    let mut queue: VecDeque<NodeIx> = VecDeque::from([root]);
    let mut visits = 0;

    while let Some(v) = queue.pop_front() {
        visits += 1;
        let n = state.get(v);
        let depth = n
            .parents
            .iter()
            .map(|&p| state.get(p).depth)
            .min()
            .map_or(0, |d| d + 1);
        let first_visit = n.offset.is_none();
        let moved = n.depth != depth;

        if first_visit {
            let offset = if n.parents.is_empty() {
                0
            } else {
                let slot = next_slot.get(&depth).copied().unwrap_or(opts.first_slot);
                n.parents
                    .iter()
                    .filter_map(|&p| state.get(p).offset)
                    .fold(slot, u32::max)
            };
            let width = n.width.unwrap_or(1);
            next_slot.insert(depth, offset.saturating_add(width));
            let n = state.get_mut(v);
            n.offset = Some(offset);
            tracing::trace!(node = v.index(), depth, offset, width, "placed");
        }
        state.get_mut(v).depth = depth;

        for &w in map.next(v) {
            state.attach_parent(w, v);
        }
        if first_visit || moved {
            queue.extend(map.next(v).iter().copied());
        }
    }
    visits
}
