#![allow(dead_code)]

use api_client::ApiClient;
use serde_json::json;

pub mod api_client;
pub mod db_test_context;
pub mod test_context;

pub static PROCURAD: ApiClient = ApiClient {
    url: "http://localhost:5000",
};

pub fn from_env(var: &str) -> String {
    std::env::var(var).expect(&format!("Env Variable '{}' missing", var))
}

/// Registers a user and logs in, returning the bearer token.
pub async fn register_and_login(
    client: &reqwest::Client,
    email: &str,
    password: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let payload = json!({
        "firstName": "Ana",
        "lastName": "Gomes",
        "email": email,
        "role": "Buyer",
        "password": password,
    });
    let _created: serde_json::Value = PROCURAD
        .post(client, "api/add/user", payload.to_string())
        .await?;

    login(client, email, password).await
}

pub async fn login(
    client: &reqwest::Client,
    email: &str,
    password: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let payload = json!({"userEmail": email, "password": password});
    let body: serde_json::Value = PROCURAD
        .post(client, "api/user/login", payload.to_string())
        .await?;
    Ok(body["accessToken"]
        .as_str()
        .expect("login response missing accessToken")
        .to_string())
}
