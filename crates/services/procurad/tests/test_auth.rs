use std::error::Error;

use common::{PROCURAD, login, register_and_login};
use reqwest::StatusCode;
use serde_json::{Value, json};
use serial_test::serial;

mod common;

use common::test_context::TestContext;

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_register_login_me_logout() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let token = register_and_login(&client, "ana.gomes@procura.st", "hunter2!").await?;

    let (status, me): (StatusCode, Option<Value>) = PROCURAD
        .get_with_token(&client, "api/users/me", &token)
        .await?;
    assert_eq!(status, StatusCode::OK);
    let me = me.expect("profile body");
    assert_eq!(me["email"], "ana.gomes@procura.st");
    assert!(me.get("passwordHash").is_none());

    let (status, body) = PROCURAD
        .post_with_token(&client, "api/user/logout", &token)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logout Successfully");

    // Logout only clears the stored copy; the token itself stays valid.
    let (status, _me): (StatusCode, Option<Value>) = PROCURAD
        .get_with_token(&client, "api/users/me", &token)
        .await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_login_rejects_bad_credentials() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    register_and_login(&client, "joao.silva@procura.st", "correct-horse").await?;

    let payload = json!({"userEmail": "joao.silva@procura.st", "password": "wrong"});
    let (status, body) = PROCURAD
        .post_raw(&client, "api/user/login", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Incorrect password.");

    let payload = json!({"userEmail": "nobody@procura.st", "password": "whatever"});
    let (status, body) = PROCURAD
        .post_raw(&client, "api/user/login", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Incorrect email.");

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_protected_routes_reject_bad_tokens() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    // No Authorization header at all.
    let response = client
        .get(format!("{}/api/users/me", PROCURAD.url))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Wrong scheme.
    let response = client
        .get(format!("{}/api/users/me", PROCURAD.url))
        .header("Authorization", "Basic dXNlcjpwdw==")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A token signed by someone else.
    let (status, _body): (StatusCode, Option<Value>) = PROCURAD
        .get_with_token(&client, "api/users/me", "not.a.token")
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_duplicate_email_rejected() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    register_and_login(&client, "maria@procura.st", "pass-one").await?;

    let payload = json!({
        "firstName": "Maria",
        "lastName": "Costa",
        "email": "maria@procura.st",
        "role": "Seller",
        "password": "pass-two",
    });
    let (status, body) = PROCURAD
        .post_raw(&client, "api/add/user", payload.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "The email is already registered.");

    // The original password still works.
    login(&client, "maria@procura.st", "pass-one").await?;

    Ok(())
}
