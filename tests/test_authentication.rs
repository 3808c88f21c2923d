//! Authentication behavior: the test constructor must never authenticate,
//! and the password grant runs only through `RedditClient::new`.
//!
//! The live-credential tests talk to the real token endpoint and therefore
//! only run when `REDDIT_*` environment variables are configured.

mod common;

use serde_json::Value;
use serial_test::serial;
use snoo::{RedditClient, Request, UserAgent};

#[tokio::test]
async fn test_constructor_skips_authentication() {
    common::init_test_logging();
    let client = common::spawn_client().await;

    assert!(
        !client.is_authenticated(),
        "Test clients must not hold a token"
    );

    let echoed: Value = client
        .execute(&Request::get("/echo"))
        .await
        .expect("GET should succeed");
    assert_eq!(
        echoed["has_authorization"],
        Value::Bool(false),
        "Test clients must not send an authorization header"
    );
}

#[tokio::test]
#[serial]
async fn live_password_grant_succeeds_with_valid_credentials() {
    common::init_test_logging();

    let identity = match UserAgent::from_env() {
        Ok(identity) => identity,
        Err(_) => {
            eprintln!("Skipping live authentication test; REDDIT_* credentials not set");
            return;
        }
    };

    let client = RedditClient::new(identity)
        .await
        .expect("password grant should succeed with valid credentials");
    assert!(client.is_authenticated(), "Client should hold a token");
}

#[tokio::test]
#[serial]
async fn live_password_grant_rejects_bad_credentials() {
    common::init_test_logging();

    if std::env::var("REDDIT_LIVE_TESTS").is_err() {
        eprintln!("Skipping live authentication test; REDDIT_LIVE_TESTS not set");
        return;
    }

    let identity = UserAgent::new(
        "snoo integration test",
        "bogus-client-id",
        "bogus-client-secret",
        "nobody",
        "wrong-password",
    );

    let result = RedditClient::new(identity).await;
    assert!(result.is_err(), "Should fail with invalid credentials");
}
