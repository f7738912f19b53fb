use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// Encoding or decoding the JSON value list failed
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// A serialized tree did not start with a root value
    #[error("serialized tree has no root value")]
    MissingRoot,
}
