//! Router assembly for the marketplace API.
//!
//! Every REST endpoint lives under `/api`; the chat websocket is at
//! `/ws/{client_id}` and the liveness probe at `/health`. Only logout and
//! `/api/users/me` sit behind the require-auth layer; the context resolver
//! runs for every request so handlers can opt into the `Ctx` extractor.

use axum::{
    Json, Router,
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{any, delete, get, post, put},
};
use serde_json::json;
use tokio::task::JoinHandle;
use tracing::{error, info};

use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use procura_web::{ctx::resolver::mw_ctx_resolver, mw_auth::mw_require_auth};

use crate::prelude::*;
use crate::state::AppState;

mod addresses;
mod auth;
mod catalog;
mod categories;
mod chat;
mod comments;
mod mail;
mod reviews;
mod users;

fn api(path: &str) -> String {
    format!("/api/{path}")
}

pub async fn setup_api(state: AppState) -> Result<JoinHandle<Result<()>>> {
    let protected_routes = Router::new()
        .route(&api("user/logout"), post(auth::logout))
        .route(&api("users/me"), get(users::me))
        .route_layer(middleware::from_fn(mw_require_auth));

    let account_routes = Router::new()
        .route(&api("user/login"), post(auth::login))
        .route(&api("see/users"), get(users::list))
        .route(&api("add/user"), post(users::add))
        .route(&api("update/user/{id}"), put(users::update))
        .route(&api("delete/user/{id}"), delete(users::remove))
        .route(
            &api("see/sellers_by_category/{category_name}"),
            get(users::sellers_by_category),
        );

    let address_routes = Router::new()
        .route(&api("see/addresses"), get(addresses::list))
        .route(&api("add/address"), post(addresses::add))
        .route(&api("see/address/{id}"), get(addresses::fetch))
        .route(&api("update/address/{id}"), put(addresses::update))
        .route(&api("delete/address/{id}"), delete(addresses::remove));

    let category_routes = Router::new()
        .route(&api("add/category"), post(categories::add))
        .route(&api("see/categories"), get(categories::list))
        .route(&api("see/category/{id}"), get(categories::fetch))
        .route(&api("update/category/{id}"), put(categories::update))
        .route(&api("delete/category/{id}"), delete(categories::remove));

    let catalog_routes = Router::new()
        .route(&api("add/products"), post(catalog::add_product))
        .route(&api("see/product/{seller_id}"), get(catalog::products_by_seller))
        .route(
            &api("see/products/category/{category_id}"),
            get(catalog::products_by_category),
        )
        .route(&api("add/posts"), post(catalog::add_post))
        .route(&api("see/posts/product/{product_id}"), get(catalog::posts_by_product))
        .route(&api("see/posts/seller/{seller_id}"), get(catalog::posts_by_seller))
        .route(&api("update/post/{id}"), put(catalog::update_post))
        .route(&api("delete/post/{id}"), delete(catalog::remove_post))
        .route(&api("add/orders"), post(catalog::add_order))
        .route(&api("see/orders/{id}"), get(catalog::fetch_order))
        .route(&api("see/orders/buyer/{buyer_id}"), get(catalog::orders_by_buyer))
        .route(&api("update/orders/{id}"), put(catalog::update_order))
        .route(&api("delete/orders/{id}"), delete(catalog::remove_order));

    let review_routes = Router::new()
        .route(&api("see/sellerReviews"), get(reviews::list_seller_reviews))
        .route(&api("see/customerReviews"), get(reviews::list_customer_reviews))
        .route(&api("add/sellerReviews"), post(reviews::add_seller_review))
        .route(&api("update/sellerReview/{id}"), put(reviews::update_seller_review))
        .route(&api("delete/sellerReview/{id}"), delete(reviews::remove_seller_review))
        .route(&api("add/productReviews"), post(reviews::add_product_review))
        .route(
            &api("see/productReviews/{product_id}"),
            get(reviews::product_reviews_by_product),
        );

    let comment_routes = Router::new()
        .route(&api("add/comments"), post(comments::add))
        .route(&api("see/comments"), get(comments::list))
        .route(&api("see/comment/{id}"), get(comments::fetch))
        .route(&api("update/comments/{id}"), put(comments::update))
        .route(&api("delete/comments/{id}"), delete(comments::remove))
        .route(&api("add/comment/{id}/like"), post(comments::like))
        .route(&api("add/commentReply/{comment_id}"), post(comments::add_reply))
        .route(&api("update/commentReply/{id}"), put(comments::update_reply))
        .route(&api("add/commentReply/{id}/like"), post(comments::like_reply))
        .route(&api("delete/commentReply/{id}"), delete(comments::remove_reply))
        .route(&api("see/user/{user_id}/commentReplied"), get(comments::replies_by_user))
        .route(&api("users/{user_id}/comments"), get(comments::comments_by_user));

    let mail_routes = Router::new()
        .route(&api("send_email"), post(mail::send_email))
        .route(&api("send-code"), post(mail::send_code))
        .route(&api("verify-code"), post(mail::verify_code))
        .route(&api("change-password"), post(mail::change_password));

    let app = Router::new()
        .merge(protected_routes)
        .merge(account_routes)
        .merge(address_routes)
        .merge(category_routes)
        .merge(catalog_routes)
        .merge(review_routes)
        .merge(comment_routes)
        .merge(mail_routes)
        .route("/ws/{client_id}", any(chat::chat_handler))
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(mw_ctx_resolver))
        .with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:5000"));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening on {bind_addr}");
    let handle = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
        Ok(())
    });

    Ok(handle)
}

/// Liveness probe: reports whether the database answers a trivial query.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping() {
        Ok(()) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "service": "Procura API"
            })),
        ),
        Err(err) => {
            error!("Health check failed: {err}");
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected"
                })),
            )
        }
    }
}
