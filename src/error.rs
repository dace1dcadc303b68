use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("like request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("like endpoint answered with {0}")]
    Status(StatusCode),

    #[error("invalid like endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("like request was cancelled")]
    Cancelled,
}
