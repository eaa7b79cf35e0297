mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Shape validation happens before the tracker store is touched, so these
// pass with no database available.

#[tokio::test]
async fn signup_rejects_malformed_email() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/signup", server.base_url))
        .json(&json!({
            "email": "not-an-email",
            "password": "x",
            "fullName": "A B"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Invalid email format", "body: {}", body);
    Ok(())
}

#[tokio::test]
async fn signup_rejects_missing_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/signup", server.base_url))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body["error"], "Email, password, and full name are required",
        "body: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn login_rejects_missing_credentials() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body["error"], "Email and password are required",
        "body: {}",
        body
    );
    Ok(())
}
