//! Subtree widths (leaf counts) used by the tree engine to reserve slots.

use crate::error::Result;
use crate::state::LayoutState;
use crate::validate::validate;
use heron_graph::{ActivityMap, NodeIx};
use std::collections::BTreeMap;

/// Fills `width` for every node reachable from `root`: 1 for a leaf, otherwise the sum of the
/// children's widths. A node shared by several parents contributes to each of them.
///
/// The walk is an explicit post-order stack; `root` must not reach a cycle (see
/// [`validate`](crate::validate::validate)).
pub(crate) fn set_widths(map: &ActivityMap, root: NodeIx, state: &mut LayoutState) {
    let mut stack: Vec<(NodeIx, bool)> = vec![(root, false)];
    while let Some((v, expanded)) = stack.pop() {
        if state.get(v).width.is_some() {
            continue;
        }
        if !expanded {
            stack.push((v, true));
            for &w in map.next(v) {
                if state.get(w).width.is_none() {
                    stack.push((w, false));
                }
            }
            continue;
        }
        let width = if map.is_leaf(v) {
            1
        } else {
            map.next(v)
                .iter()
                .map(|&w| state.get(w).width.unwrap_or(1))
                .fold(0u32, u32::saturating_add)
        };
        state.get_mut(v).width = Some(width);
    }
}

/// Width of every node reachable from `root`, keyed by id.
pub fn subtree_widths(map: &ActivityMap, root: &str) -> Result<BTreeMap<String, u32>> {
    let root = validate(map, root)?;
    let mut state = LayoutState::new(map);
    set_widths(map, root, &mut state);
    Ok(map
        .node_ixs()
        .filter_map(|v| state.get(v).width.map(|w| (map.id(v).to_string(), w)))
        .collect())
}
