//! Input checks shared by both engines.

use crate::error::{Error, Result};
use heron_graph::{ActivityMap, NodeIx, alg};

/// Resolves `root` and checks the preconditions every engine relies on: the root exists, nothing
/// points at it, and no cycle is reachable from it.
pub fn validate(map: &ActivityMap, root: &str) -> Result<NodeIx> {
    let Some(root_ix) = map.node_ix(root) else {
        return Err(Error::UnknownRoot {
            id: root.to_string(),
        });
    };
    if let Some(&parent) = map.prev(root_ix).first() {
        return Err(Error::InvalidRoot {
            id: root.to_string(),
            parent: map.id(parent).to_string(),
        });
    }
    if let Some(cycle) = alg::find_cycle(map, root_ix) {
        return Err(Error::Cycle {
            path: cycle.iter().map(|&v| map.id(v).to_string()).collect(),
        });
    }
    Ok(root_ix)
}
