use std::fmt;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::client::auth;
use crate::client::types::{Method, Request, UserAgent};
use crate::error::{Error, Result};

/// Base URL all request paths are resolved against.
const BASE_URL: &str = "https://oauth.reddit.com/api";
/// Content type for POST bodies, so Reddit knows how to read the form.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Fallback identification for clients built without a [`UserAgent`].
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("snoo/", env!("CARGO_PKG_VERSION"));

/// An authenticated connection to the Reddit API.
///
/// Construction performs the one-time password-grant exchange; after that
/// the client is immutable and safe for repeated sequential calls. It keeps
/// no per-request state, so sharing it across tasks needs no extra
/// synchronization beyond what `reqwest` already provides.
pub struct RedditClient {
    /// Base url for all api calls.
    base_url: String,
    /// Transport used to issue requests.
    http: reqwest::Client,
    /// Bearer token from the password grant; absent for test clients.
    token: Option<String>,
    /// Identification string sent as the `user-agent` header.
    user_agent: String,
}

impl RedditClient {
    /// Authenticates with Reddit and returns a ready client.
    ///
    /// Fails with [`Error::Authentication`] if the token exchange is
    /// rejected or unreachable; no client is produced in that case.
    pub async fn new(identity: UserAgent) -> Result<Self> {
        let token = auth::request_token(&identity).await?;

        Ok(Self {
            base_url: BASE_URL.to_string(),
            http: reqwest::Client::new(),
            token: Some(token),
            user_agent: identity.user_agent,
        })
    }

    /// Returns a client that uses the provided transport and base URL,
    /// bypassing authentication. Intended for tests that point the client
    /// at a local server.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Whether this client holds a bearer token from the password grant.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Executes a request and decodes the JSON response into `T`.
    ///
    /// Any failure, from request construction through transport, status
    /// validation, body read and decode, aborts the call and surfaces
    /// immediately; nothing is retried.
    pub async fn execute<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let body = self.dispatch(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Builds the outgoing HTTP request from a [`Request`] value.
    fn build_request(&self, request: &Request) -> Result<reqwest::RequestBuilder> {
        let call_url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => {
                let call_url = match &request.params {
                    Some(params) => format!("{call_url}?{}", params.encode()),
                    None => call_url,
                };
                self.http.get(Url::parse(&call_url)?)
            }
            Method::Post => {
                let params = request.params.as_ref().ok_or(Error::EmptyPostBody)?;
                self.http
                    .post(Url::parse(&call_url)?)
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(params.encode())
            }
        };

        let builder = builder.header(USER_AGENT, self.user_agent.as_str());
        Ok(match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        })
    }

    /// Sends the request and returns the validated response body.
    async fn dispatch(&self, request: &Request) -> Result<Vec<u8>> {
        let builder = self.build_request(request)?;

        tracing::debug!("Dispatching {:?} {}", request.method, request.path);
        let response = builder.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("Request to {} failed with status {}", request.path, status);
            return Err(Error::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(Error::BodyRead)?;
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        Ok(body.to_vec())
    }
}

impl fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedditClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
