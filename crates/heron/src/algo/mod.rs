pub mod orthogonal;
pub mod tree;

#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Layered layout tolerant of merge points, with leaf compaction and flip-aware routing.
    Orthogonal(OrthogonalOptions),
    /// Width-reserving layout for tree and forest shaped maps.
    Tree(TreeOptions),
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Orthogonal(OrthogonalOptions::default())
    }
}

#[derive(Debug, Clone)]
pub struct OrthogonalOptions {
    /// Pull lonely single-parent leaves back next to their parent after placement.
    pub compact_leaves: bool,
    /// A leaf further than this from its layer neighbour (or, without one, from its parent) is
    /// relocated by the compaction pass.
    pub max_leaf_distance: u32,
}

impl Default for OrthogonalOptions {
    fn default() -> Self {
        Self {
            compact_leaves: true,
            max_leaf_distance: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// First free offset of every layer below the root.
    pub first_slot: u32,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self { first_slot: 1 }
    }
}
