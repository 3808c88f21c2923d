//! # Reddit HTTP Client
//!
//! This module provides the authenticated HTTP client for the Reddit API:
//! the one-time password-grant token exchange, request construction, and
//! transport execution with JSON decoding.
//!
//! ## Modules
//!
//! - [`auth`] - Password-grant OAuth2 token exchange (internal)
//! - [`client`] - The [`RedditClient`] transport
//! - [`types`] - Value types describing API calls
//!
//! ## Quick Start
//!
//! ```no_run
//! use snoo::client::{Params, RedditClient, Request, UserAgent};
//!
//! # async fn example() -> snoo::Result<()> {
//! let client = RedditClient::new(UserAgent::from_env()?).await?;
//!
//! let comment: serde_json::Value = client
//!     .execute(&Request::post(
//!         "/comment",
//!         Params::new()
//!             .add("thing_id", "t3_abcdef")
//!             .add("text", "hello from snoo"),
//!     ))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use client::RedditClient;
pub use types::{Method, Params, Request, UserAgent};
