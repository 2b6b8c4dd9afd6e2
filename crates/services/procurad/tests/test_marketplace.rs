use std::error::Error;

use common::PROCURAD;
use reqwest::StatusCode;
use serde_json::{Value, json};
use serial_test::serial;

mod common;

use common::test_context::TestContext;

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_category_crud() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let payload = json!({"name": "Carpintaria"});
    let created: Value = PROCURAD
        .post(&client, "api/add/category", payload.to_string())
        .await?;
    let id = created["id"].as_i64().expect("category id");
    assert_eq!(created["name"], "Carpintaria");

    let fetched: Value = PROCURAD.get(&format!("api/see/category/{id}")).await;
    assert_eq!(fetched["name"], "Carpintaria");

    let (status, updated) = PROCURAD
        .put(
            &client,
            &format!("api/update/category/{id}"),
            json!({"name": "Marcenaria"}).to_string(),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Marcenaria");

    let status = PROCURAD
        .delete(&client, &format!("api/delete/category/{id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let status = PROCURAD
        .delete(&client, &format!("api/delete/category/{id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_seller_can_only_be_rated_once_per_customer() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let seller: Value = PROCURAD
        .post(
            &client,
            "api/add/user",
            json!({
                "firstName": "Rui",
                "lastName": "Pires",
                "email": "rui.seller@procura.st",
                "role": "Seller",
                "password": "sell-sell",
            })
            .to_string(),
        )
        .await?;
    let buyer: Value = PROCURAD
        .post(
            &client,
            "api/add/user",
            json!({
                "firstName": "Ines",
                "lastName": "Dias",
                "email": "ines.buyer@procura.st",
                "role": "Buyer",
                "password": "buy-buy",
            })
            .to_string(),
        )
        .await?;

    let review = json!({
        "sellerId": seller["id"],
        "customerId": buyer["id"],
        "customerReview": "Great work",
        "rating": 5,
    });
    let (status, _) = PROCURAD
        .post_raw(&client, "api/add/sellerReviews", review.to_string())
        .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = PROCURAD
        .post_raw(&client, "api/add/sellerReviews", review.to_string())
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "The buyer has already reviewed this seller."
    );

    let listing: Value = PROCURAD
        .get(&format!(
            "api/see/sellerReviews?sellerId={}",
            seller["id"].as_i64().unwrap()
        ))
        .await;
    assert_eq!(listing["totalCustomers"], 1);
    assert_eq!(listing["reviews"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_user_update_is_merge_patch() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let user: Value = PROCURAD
        .post(
            &client,
            "api/add/user",
            json!({
                "firstName": "Tiago",
                "lastName": "Neves",
                "email": "tiago@procura.st",
                "role": "Seller",
                "password": "secret!",
                "phoneNumber": "+239 991 0000",
            })
            .to_string(),
        )
        .await?;
    let id = user["id"].as_i64().expect("user id");

    // Only firstName is present; the other fields must keep their values.
    let (status, updated) = PROCURAD
        .put(
            &client,
            &format!("api/update/user/{id}"),
            json!({"firstName": "Thiago"}).to_string(),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Thiago");
    assert_eq!(updated["lastName"], "Neves");
    assert_eq!(updated["phoneNumber"], "+239 991 0000");

    // An empty patch changes nothing and still succeeds.
    let (status, unchanged) = PROCURAD
        .put(
            &client,
            &format!("api/update/user/{id}"),
            json!({}).to_string(),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["firstName"], "Thiago");

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running procurad instance and database"]
async fn test_health_reports_database() -> Result<(), Box<dyn Error>> {
    let (_db, _client) = TestContext::from_env();

    let health: Value = PROCURAD.get("health").await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "connected");

    Ok(())
}
