//! Reachability walks over an [`ActivityMap`].
//!
//! Both orderings deduplicate on pop: a node that is queued several times before it is first
//! visited is emitted once, at the position of its earliest pop. Layout engines rely on the exact
//! order for tie-breaking, so the queue discipline of each walk is part of its contract.

use super::{ActivityMap, NodeIx};
use std::collections::VecDeque;

/// Breadth-first order from `root`: successors are appended to the back of the queue.
pub fn bfs(g: &ActivityMap, root: NodeIx) -> Vec<NodeIx> {
    let mut visited = vec![false; g.node_count()];
    let mut out: Vec<NodeIx> = Vec::new();
    let mut queue: VecDeque<NodeIx> = VecDeque::new();
    queue.push_back(root);
    while let Some(v) = queue.pop_front() {
        if std::mem::replace(&mut visited[v.index()], true) {
            continue;
        }
        out.push(v);
        queue.extend(g.next(v).iter().copied());
    }
    out
}

/// Depth-first preorder from `root`: successors are prepended to the front of the queue, keeping
/// their relative `next` order.
pub fn dfs(g: &ActivityMap, root: NodeIx) -> Vec<NodeIx> {
    let mut visited = vec![false; g.node_count()];
    let mut out: Vec<NodeIx> = Vec::new();
    let mut queue: VecDeque<NodeIx> = VecDeque::new();
    queue.push_back(root);
    while let Some(v) = queue.pop_front() {
        if std::mem::replace(&mut visited[v.index()], true) {
            continue;
        }
        out.push(v);
        prepend(&mut queue, g.next(v));
    }
    out
}

/// Pushes `items` onto the front of `queue` so that `items[0]` is popped first.
pub fn prepend(queue: &mut VecDeque<NodeIx>, items: &[NodeIx]) {
    for &w in items.iter().rev() {
        queue.push_front(w);
    }
}

/// Returns the nodes of the first cycle reachable from `root`, if any.
///
/// The cycle is reported starting at the node the back edge points to, in traversal order.
pub fn find_cycle(g: &ActivityMap, root: NodeIx) -> Option<Vec<NodeIx>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        White,
        Grey,
        Black,
    }

    let mut mark = vec![Mark::White; g.node_count()];
    // (node, index of the next successor to inspect)
    let mut stack: Vec<(NodeIx, usize)> = vec![(root, 0)];
    mark[root.index()] = Mark::Grey;

    while let Some(top) = stack.last_mut() {
        let v = top.0;
        let next = g.next(v);
        if top.1 == next.len() {
            mark[v.index()] = Mark::Black;
            stack.pop();
            continue;
        }
        let w = next[top.1];
        top.1 += 1;
        match mark[w.index()] {
            Mark::White => {
                mark[w.index()] = Mark::Grey;
                stack.push((w, 0));
            }
            Mark::Grey => {
                let start = stack.iter().position(|&(u, _)| u == w).unwrap_or(0);
                return Some(stack[start..].iter().map(|&(u, _)| u).collect());
            }
            Mark::Black => {}
        }
    }
    None
}
