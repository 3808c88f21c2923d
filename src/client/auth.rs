//! Password-grant authentication against the Reddit token endpoint.
//!
//! Reddit script apps exchange their client id/secret plus account
//! credentials directly for a bearer token (the OAuth2 resource-owner
//! password flow); there is no redirect or consent step. The exchange runs
//! exactly once, from [`RedditClient::new`](super::client::RedditClient::new).

use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthUrl, ClientId, ClientSecret, ResourceOwnerPassword, ResourceOwnerUsername, TokenResponse,
    TokenUrl,
};

use crate::client::types::UserAgent;
use crate::error::{Error, Result};

/// Token endpoint for the password grant.
const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
/// Authorization endpoint; required to construct the OAuth2 client even
/// though the password grant never redirects through it.
const AUTHORIZE_URL: &str = "https://www.reddit.com/api/v1/authorize";

/// Exchanges the identification's credentials for a bearer token.
pub(crate) async fn request_token(identity: &UserAgent) -> Result<String> {
    tracing::info!("Requesting access token for user: {}", identity.username);

    let token = oauth2_client(identity)?
        .exchange_password(
            &ResourceOwnerUsername::new(identity.username.clone()),
            &ResourceOwnerPassword::new(identity.password.clone()),
        )
        .request_async(async_http_client)
        .await
        .map_err(|e| {
            tracing::error!("Token exchange failed: {e}");
            Error::Authentication(e.to_string())
        })?;

    tracing::info!("Token exchange succeeded for user: {}", identity.username);
    Ok(token.access_token().secret().clone())
}

/// Builds the OAuth2 client for the fixed Reddit endpoints. The client id
/// and secret ride along as HTTP basic auth, which is what Reddit expects.
fn oauth2_client(identity: &UserAgent) -> Result<BasicClient> {
    let auth_url = AuthUrl::new(AUTHORIZE_URL.to_string())?;
    let token_url = TokenUrl::new(TOKEN_URL.to_string())?;

    Ok(BasicClient::new(
        ClientId::new(identity.client_id.clone()),
        Some(ClientSecret::new(identity.client_secret.clone())),
        auth_url,
        Some(token_url),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth2_client_builds_from_identity() {
        let identity = UserAgent::new("bot/1.0", "id", "secret", "user", "password");
        assert!(oauth2_client(&identity).is_ok());
    }
}
