//! Error types for the Reddit API client.

use thiserror::Error;

/// A specialized `Result` type for Reddit API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a call through this crate can fail.
///
/// All variants are terminal: nothing is retried internally, and each error
/// carries the context a caller needs to decide what to do next (the HTTP
/// status code, the underlying transport or decode cause).
#[derive(Error, Debug)]
pub enum Error {
    /// The OAuth2 password grant was rejected or could not be completed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Identification could not be assembled from the environment.
    #[error("configuration error: {0}")]
    Config(String),

    /// A POST request was built without form parameters.
    #[error("no values for POST body")]
    EmptyPostBody,

    /// The request URL did not parse; nothing was sent.
    #[error("invalid request url: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The underlying HTTP call failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    #[error("bad status: {0}")]
    BadStatus(u16),

    /// The server answered 200 with an empty body.
    #[error("empty response body")]
    EmptyBody,

    /// The response body could not be read to completion.
    #[error("reading response body failed: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The response body was not valid JSON for the requested target type.
    #[error("decoding response failed: {0}")]
    Decode(#[from] serde_json::Error),
}
