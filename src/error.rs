use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThingfulError {
    #[error("no query was defined")]
    InvalidQuery,

    #[error("invalid geobounds parameter")]
    InvalidBounds,

    #[error("no arguments were given")]
    MissingArgs,

    #[error("no search query was defined")]
    MissingQuery,

    #[error("no search bounds were defined")]
    MissingBounds,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bad HTTP response ({0})")]
    Http(reqwest::StatusCode),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
