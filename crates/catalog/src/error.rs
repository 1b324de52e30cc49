use thiserror::Error;

/// Failure talking to the catalog provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
