//! Coordinate assignment for the orthogonal engine.

use crate::state::LayoutState;
use heron_graph::{ActivityMap, NodeIx, alg};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Row bookkeeping for the children of one parent.
///
/// `depth == 0` means the parent's own row is still free for its next child; afterwards `offset`
/// holds the row the most recent child was pushed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PrevChild {
    pub depth: u32,
    pub offset: u32,
}

/// State of one placement pass.
#[derive(Debug)]
pub(crate) struct PlacementContext {
    queue: VecDeque<NodeIx>,
    visited: Vec<bool>,
    prev_child: FxHashMap<NodeIx, PrevChild>,
    total_offset: u32,
}

impl PlacementContext {
    pub fn new(map: &ActivityMap, root: NodeIx) -> Self {
        Self {
            queue: VecDeque::from([root]),
            visited: vec![false; map.node_count()],
            prev_child: FxHashMap::default(),
            total_offset: 0,
        }
    }

    /// Highest offset handed out so far.
    pub fn total_offset(&self) -> u32 {
        self.total_offset
    }

    /// Drains the queue, placing every reachable node once. Returns the number of nodes placed.
    pub fn run(&mut self, map: &ActivityMap, state: &mut LayoutState) -> usize {
        let mut placed = 0;
        while self.step(map, state).is_some() {
            placed += 1;
        }
        placed
    }

    /// Places the next unvisited node in the queue and links its successors. Returns `None` once
    /// the queue is drained.
    fn step(&mut self, map: &ActivityMap, state: &mut LayoutState) -> Option<NodeIx> {
        while let Some(v) = self.queue.pop_front() {
            if std::mem::replace(&mut self.visited[v.index()], true) {
                continue;
            }
            self.place(v, state);
            self.link_successors(map, v, state);
            return Some(v);
        }
        None
    }

    fn place(&mut self, v: NodeIx, state: &mut LayoutState) {
        let Some(&parent) = state.get(v).parents.first() else {
            let n = state.get_mut(v);
            n.depth = 0;
            n.offset = Some(0);
            return;
        };

        let parent_pos = state.position(parent);
        let prev = self.prev_child.entry(parent).or_default();
        let offset = if prev.depth == 0 {
            prev.depth = 1;
            parent_pos.offset + prev.offset
        } else {
            self.total_offset += 1;
            prev.offset = self.total_offset;
            self.total_offset
        };
        let depth = parent_pos.depth + prev.depth;

        tracing::trace!(
            node = v.index(),
            parent = parent.index(),
            depth,
            offset,
            "placed"
        );
        let n = state.get_mut(v);
        n.depth = depth;
        n.offset = Some(offset);
    }

    /// Records `v` as a parent of each successor, nudges already placed successors (merge
    /// re-arrivals) and queues the successors ahead of older entries.
    fn link_successors(&mut self, map: &ActivityMap, v: NodeIx, state: &mut LayoutState) {
        let depth = state.get(v).depth;
        for &w in map.next(v) {
            state.attach_parent(w, v);
            if !self.visited[w.index()] {
                continue;
            }
            let n = state.get_mut(w);
            let offset = n.offset.unwrap_or(0) + 1;
            n.offset = Some(offset);
            n.depth = n.depth.max(depth + 1);
            self.total_offset = self.total_offset.max(offset);
            tracing::trace!(
                node = w.index(),
                via = v.index(),
                depth = n.depth,
                offset,
                "merge re-arrival"
            );
        }
        alg::prepend(&mut self.queue, map.next(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_child_takes_parent_row_and_later_children_open_rows() {
        let mut map = ActivityMap::new();
        map.set_next("root", ["a", "b", "c"]);
        let root = map.node_ix("root").unwrap();
        let mut state = LayoutState::new(&map);
        let mut ctx = PlacementContext::new(&map, root);

        assert_eq!(ctx.run(&map, &mut state), 4);
        assert_eq!(ctx.total_offset(), 2);
        assert_eq!(
            ctx.prev_child.get(&root).copied(),
            Some(PrevChild {
                depth: 1,
                offset: 2
            })
        );

        let offset = |id: &str| state.get(map.node_ix(id).unwrap()).offset;
        assert_eq!(offset("a"), Some(0));
        assert_eq!(offset("b"), Some(1));
        assert_eq!(offset("c"), Some(2));
    }

    #[test]
    fn re_arrival_pushes_the_merge_node_below_the_arriving_parent() {
        let mut map = ActivityMap::new();
        map.set_next("root", ["a", "b", "c", "d"]);
        map.set_next("a", ["c", "d"]);
        map.set_next("b", ["c", "d"]);
        map.set_next("c", ["e"]);
        map.set_next("d", ["e"]);
        let root = map.node_ix("root").unwrap();
        let mut state = LayoutState::new(&map);
        let mut ctx = PlacementContext::new(&map, root);

        let mut re_arrivals = 0;
        while let Some(v) = ctx.step(&map, &mut state) {
            let via = state.get(v).depth;
            for &w in map.next(v) {
                if !ctx.visited[w.index()] {
                    continue;
                }
                re_arrivals += 1;
                assert!(
                    state.get(w).depth > via,
                    "{} at depth {} after arriving from {} at depth {via}",
                    map.id(w),
                    state.get(w).depth,
                    map.id(v)
                );
            }
        }
        assert!(re_arrivals > 0);

        // A later bump of `c` and `d` can still lift them to the layer `e` ended up in.
        let depth = |id: &str| state.get(map.node_ix(id).unwrap()).depth;
        assert_eq!(depth("e"), 2);
        assert_eq!(depth("c"), 2);
        assert_eq!(depth("d"), 2);
    }

    #[test]
    fn new_context_starts_empty() {
        let mut map = ActivityMap::new();
        map.set_node("root");
        let root = map.node_ix("root").unwrap();
        let ctx = PlacementContext::new(&map, root);
        assert!(ctx.prev_child.is_empty());
        assert_eq!(ctx.total_offset(), 0);
    }
}
