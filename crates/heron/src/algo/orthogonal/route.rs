//! Edge routing with flip logic.

use crate::model::{Polyline, Position};
use crate::state::{LayoutState, OffsetMap};
use heron_graph::NodeIx;
use std::cmp::Ordering;

/// Horizontal-then-vertical route: leave the parent along its row, turn at the child's depth.
pub(crate) fn elbow(from: Position, to: Position) -> Polyline {
    vec![from, Position::new(to.depth, from.offset), to]
}

/// Vertical-then-horizontal route: turn inside the parent's layer first.
pub(crate) fn flipped(from: Position, to: Position) -> Polyline {
    vec![from, Position::new(from.depth, to.offset), to]
}

/// A node flips its edges when a parent shares its offset or when it has more than two parents.
pub(crate) fn wants_flip(state: &LayoutState, v: NodeIx) -> bool {
    let n = state.get(v);
    let offset = state.position(v).offset;
    n.parents.len() > 2 || n.parents.iter().any(|&p| state.position(p).offset == offset)
}

/// Whether the flipped segment inside the parent's layer stays clear of the parent's neighbour on
/// the side the child lies on.
pub(crate) fn has_flip_space(offsets: &OffsetMap, from: Position, to: Position) -> bool {
    match to.offset.cmp(&from.offset) {
        Ordering::Greater => offsets
            .following(from.depth, from.offset)
            .is_none_or(|next| next > to.offset),
        Ordering::Less => offsets
            .preceding(from.depth, from.offset)
            .is_none_or(|prev| prev < to.offset),
        Ordering::Equal => false,
    }
}

/// Builds one polyline per parent of `v`, in parent order. Returns the polylines and how many of
/// them were flipped.
pub(crate) fn route_node(
    state: &LayoutState,
    offsets: &OffsetMap,
    v: NodeIx,
) -> (Vec<Polyline>, usize) {
    let to = state.position(v);
    let flip = wants_flip(state, v);
    let mut flips = 0;
    let edges = state
        .get(v)
        .parents
        .iter()
        .map(|&p| {
            let from = state.position(p);
            if flip && has_flip_space(offsets, from, to) {
                flips += 1;
                flipped(from, to)
            } else {
                elbow(from, to)
            }
        })
        .collect();
    (edges, flips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(entries: &[u32]) -> (OffsetMap, Position) {
        let mut map = heron_graph::ActivityMap::new();
        for i in 0..entries.len() {
            map.set_node(format!("n{i}"));
        }
        let mut state = LayoutState::new(&map);
        let ixs: Vec<NodeIx> = map.node_ixs().collect();
        for (&v, &offset) in ixs.iter().zip(entries) {
            state.set_position(v, Position::new(1, offset));
        }
        (OffsetMap::build(&state, &ixs), Position::new(1, entries[0]))
    }

    #[test]
    fn elbow_and_flipped_routes_share_endpoints() {
        let from = Position::new(1, 0);
        let to = Position::new(2, 3);
        assert_eq!(elbow(from, to), vec![from, Position::new(2, 0), to]);
        assert_eq!(flipped(from, to), vec![from, Position::new(1, 3), to]);
    }

    #[test]
    fn flip_space_below_requires_a_clear_gap() {
        let (offsets, parent) = layer(&[2, 5]);
        assert!(has_flip_space(&offsets, parent, Position::new(2, 4)));
        assert!(!has_flip_space(&offsets, parent, Position::new(2, 5)));
        assert!(!has_flip_space(&offsets, parent, Position::new(2, 6)));
    }

    #[test]
    fn flip_space_above_requires_a_clear_gap() {
        let (offsets, parent) = layer(&[4, 1]);
        assert!(has_flip_space(&offsets, parent, Position::new(2, 2)));
        assert!(!has_flip_space(&offsets, parent, Position::new(2, 1)));
        assert!(!has_flip_space(&offsets, parent, Position::new(2, 0)));
    }

    #[test]
    fn flip_space_without_neighbours_is_free() {
        let (offsets, parent) = layer(&[3]);
        assert!(has_flip_space(&offsets, parent, Position::new(2, 9)));
        assert!(has_flip_space(&offsets, parent, Position::new(2, 0)));
        assert!(!has_flip_space(&offsets, parent, Position::new(2, 3)));
    }
}
