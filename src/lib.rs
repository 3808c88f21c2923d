//! # snoo
//!
//! A minimal authenticated client for the Reddit API.
//!
//! This crate handles exactly one concern: exchanging script-app credentials
//! for an OAuth2 bearer token, then issuing GET/POST calls against the Reddit
//! OAuth API and decoding the JSON responses into caller-supplied types.
//! There is no retry policy, no rate-limit handling, and no pagination; one
//! call in, one decoded value (or one error) out.
//!
//! ## Client Module
//!
//! The [`client`] module provides the HTTP client itself: the password-grant
//! authentication step, the [`Request`] value type describing a call, and the
//! transport that executes it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use snoo::{RedditClient, Request, UserAgent};
//!
//! # async fn example() -> snoo::Result<()> {
//! let identity = UserAgent::new(
//!     "demo-bot/0.1 by u/demo",
//!     "client-id",
//!     "client-secret",
//!     "username",
//!     "password",
//! );
//!
//! // One-time password-grant exchange against the Reddit token endpoint.
//! let client = RedditClient::new(identity).await?;
//!
//! // Decode responses into any serde type the endpoint matches.
//! let me: serde_json::Value = client.execute(&Request::get("/v1/me")).await?;
//! println!("{me}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{Method, Params, RedditClient, Request, UserAgent};
pub use error::{Error, Result};
