use std::error::Error;

use common::{PROCURAD, login, register_and_login};
use reqwest::StatusCode;
use serde_json::json;
use serial_test::serial;

mod common;

use common::test_context::TestContext;

const EMAIL: &str = "reset.me@procura.st";

async fn request_code(client: &reqwest::Client) -> Result<i64, Box<dyn Error>> {
    let payload = json!({"email": EMAIL});
    let (status, body) = PROCURAD
        .post_raw(client, "api/send-code", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body["code"].as_i64().expect("code in response"))
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_code_verifies_and_is_not_consumed() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();
    register_and_login(&client, EMAIL, "initial-pass").await?;

    let code = request_code(&client).await?;

    let payload = json!({"email": EMAIL, "code": code});
    let (status, _) = PROCURAD
        .post_raw(&client, "api/verify-code", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::OK);

    // A successful validation does not consume the code.
    let (status, _) = PROCURAD
        .post_raw(&client, "api/verify-code", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_only_latest_code_counts() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();
    register_and_login(&client, EMAIL, "initial-pass").await?;

    let first = request_code(&client).await?;
    let second = request_code(&client).await?;

    if first != second {
        let payload = json!({"email": EMAIL, "code": first});
        let (status, body) = PROCURAD
            .post_raw(&client, "api/verify-code", payload.to_string())
            .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "The verification code is invalid.");
    }

    let payload = json!({"email": EMAIL, "code": second});
    let (status, _) = PROCURAD
        .post_raw(&client, "api/verify-code", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_change_password_flow() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();
    register_and_login(&client, EMAIL, "initial-pass").await?;

    // Confirmation mismatch is rejected before anything changes.
    let payload = json!({
        "new_password": "brand-new",
        "conf_new_password": "different",
        "email": EMAIL,
    });
    let (status, body) = PROCURAD
        .post_raw(&client, "api/change-password", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "The provided passwords do not match."
    );

    let payload = json!({
        "new_password": "brand-new",
        "conf_new_password": "brand-new",
        "email": EMAIL,
    });
    let (status, _) = PROCURAD
        .post_raw(&client, "api/change-password", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::OK);

    login(&client, EMAIL, "brand-new").await?;

    let payload = json!({"userEmail": EMAIL, "password": "initial-pass"});
    let (status, _) = PROCURAD
        .post_raw(&client, "api/user/login", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_unknown_email_cannot_request_code() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let payload = json!({"email": "ghost@procura.st"});
    let (status, body) = PROCURAD
        .post_raw(&client, "api/send-code", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Email not found.");

    Ok(())
}
