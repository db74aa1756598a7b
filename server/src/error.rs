pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Binding(#[from] routify::binding::Error),
    #[error("Failed to serve: {0}")]
    Serve(#[from] hyper::Error),
    #[error("Failed to serialize listing: {0}")]
    Serialize(#[from] serde_json::Error),
}
