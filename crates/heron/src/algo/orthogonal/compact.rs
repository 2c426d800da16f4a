//! Leaf compaction: pulls long, lonely leaf branches back beside their parent.

use crate::model::Position;
use crate::state::{LayoutState, OffsetMap};
use heron_graph::{ActivityMap, NodeIx};

/// Relocates single-parent leaves whose distance exceeds `max_distance`.
///
/// The distance is the gap to the preceding offset in the leaf's own layer when there is one, and
/// the Manhattan distance to the parent otherwise. A relocated leaf moves to the parent's depth,
/// one slot past the preceding offset (or past the parent). Layer offsets are sampled once, before
/// any leaf moves. Returns the number of relocated leaves.
pub(crate) fn compact_leaves(
    map: &ActivityMap,
    order: &[NodeIx],
    state: &mut LayoutState,
    max_distance: u32,
) -> usize {
    let offsets = OffsetMap::build(state, order);
    let mut moved = 0;
    for &v in order {
        if !map.is_leaf(v) {
            continue;
        }
        let &[parent] = state.get(v).parents.as_slice() else {
            continue;
        };
        let pos = state.position(v);
        let parent_pos = state.position(parent);
        let sibling = offsets.preceding(pos.depth, pos.offset);
        let distance = match sibling {
            Some(sibling) => pos.offset - sibling,
            None => pos.manhattan(parent_pos),
        };
        if distance <= max_distance {
            continue;
        }
        let to = Position::new(parent_pos.depth, sibling.unwrap_or(parent_pos.offset) + 1);
        tracing::trace!(node = v.index(), ?pos, ?to, distance, "compacted leaf");
        state.set_position(v, to);
        moved += 1;
    }
    moved
}
