//! Value types describing Reddit API calls.
//!
//! A call is described by a [`Request`]: a [`Method`], a path resolved
//! against the OAuth API base URL, and optional form [`Params`]. The caller
//! identifies itself with a [`UserAgent`], which bundles the script-app
//! credentials with the display string Reddit requires in the `user-agent`
//! header of every request.

use std::env;
use std::fmt;

use crate::error::{Error, Result};

/// HTTP method for an API call.
///
/// The Reddit endpoints this crate targets only ever use GET and POST, so
/// the enum is closed; there is no way to construct an unsupported method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters are encoded into the query string.
    Get,
    /// Parameters are encoded into the request body.
    Post,
}

/// Ordered form parameters for an API call.
///
/// Insertion order is preserved on the wire and duplicate keys are allowed,
/// matching how Reddit reads repeated form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `key=value` pair.
    #[must_use]
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Percent-encodes the pairs into `application/x-www-form-urlencoded`
    /// form, in insertion order.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Describes one Reddit API call.
///
/// The path is appended to the client's base URL as-is, so it should begin
/// with a slash (`"/v1/me"`).
#[derive(Debug, Clone)]
pub struct Request {
    /// The request method.
    pub method: Method,
    /// Path segment resolved against the base URL.
    pub path: String,
    /// Form parameters; mandatory for POST, optional for GET.
    pub params: Option<Params>,
}

impl Request {
    /// A GET request with no parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            params: None,
        }
    }

    /// A GET request whose parameters go into the query string.
    pub fn get_with_params(path: impl Into<String>, params: Params) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            params: Some(params),
        }
    }

    /// A POST request whose parameters go into the form body.
    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            params: Some(params),
        }
    }
}

/// Identification for a Reddit script app.
///
/// Bundles the OAuth2 client credentials and account credentials used for
/// the one-time password grant with the display string sent as the
/// `user-agent` header of every request. Reddit asks that the string name
/// the app and its operator, e.g. `"my-bot/0.3 by u/someone"`.
#[derive(Clone)]
pub struct UserAgent {
    /// Display string sent with every request.
    pub user_agent: String,
    /// OAuth2 client id of the script app.
    pub client_id: String,
    /// OAuth2 client secret of the script app.
    pub client_secret: String,
    /// Account username for the password grant.
    pub username: String,
    /// Account password for the password grant.
    pub password: String,
}

impl UserAgent {
    pub fn new(
        user_agent: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Builds the identification from `REDDIT_*` environment variables.
    ///
    /// `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`, `REDDIT_USERNAME` and
    /// `REDDIT_PASSWORD` are required; `REDDIT_USER_AGENT` falls back to the
    /// crate default.
    pub fn from_env() -> Result<Self> {
        let user_agent = env::var("REDDIT_USER_AGENT")
            .unwrap_or_else(|_| super::client::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            user_agent,
            client_id: required_var("REDDIT_CLIENT_ID")?,
            client_secret: required_var("REDDIT_CLIENT_SECRET")?,
            username: required_var("REDDIT_USERNAME")?,
            password: required_var("REDDIT_PASSWORD")?,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{name} is not set")))
}

impl fmt::Debug for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAgent")
            .field("user_agent", &self.user_agent)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
