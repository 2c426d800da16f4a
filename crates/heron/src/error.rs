#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("root node `{id}` is not part of the map")]
    UnknownRoot { id: String },

    #[error("root node `{id}` has an incoming edge from `{parent}`")]
    InvalidRoot { id: String, parent: String },

    #[error("map contains a cycle reachable from the root: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("node `{id}` is defined more than once")]
    DuplicateNode { id: String },

    #[error("node `{from}` points at undefined node `{id}`")]
    MissingNode { from: String, id: String },

    #[error("invalid map document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
