pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("base url cannot carry path segments")]
    BaseUrlNotHierarchical,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("roadmap API returned {status}: {snippet}")]
    Status {
        status: reqwest::StatusCode,
        snippet: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
