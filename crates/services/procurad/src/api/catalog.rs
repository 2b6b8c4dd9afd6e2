//! Product, post, and order handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use procura_models::{
    catalog::product::{NewProduct, Product},
    trade::{
        order::{Order, OrderChange},
        post::{Post, PostChange},
    },
};
use procura_web::prelude::{Error as WebError, Result as WebResult};
use serde_json::{Value, json};

use crate::state::AppState;

/* Products */

pub async fn add_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> WebResult<(StatusCode, Json<Product>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn products_by_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i32>,
) -> WebResult<Json<Vec<Product>>> {
    Ok(Json(Product::fetch_by_seller(seller_id, &state.db)?))
}

pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> WebResult<Json<Vec<Product>>> {
    Ok(Json(Product::fetch_by_category(category_id, &state.db)?))
}

/* Posts */

pub async fn add_post(
    State(state): State<AppState>,
    Json(payload): Json<PostChange>,
) -> WebResult<(StatusCode, Json<Post>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn posts_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> WebResult<Json<Vec<Post>>> {
    Ok(Json(Post::fetch_by_product(product_id, &state.db)?))
}

pub async fn posts_by_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i32>,
) -> WebResult<Json<Vec<Post>>> {
    Ok(Json(Post::fetch_by_seller(seller_id, &state.db)?))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PostChange>,
) -> WebResult<Json<Post>> {
    let post = Post::update(id, &payload, &state.db)?.ok_or(WebError::NotFound("Post"))?;
    Ok(Json(post))
}

pub async fn remove_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Value>> {
    if Post::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Post"));
    }
    Ok(Json(json!({"message": "Post deleted successfully"})))
}

/* Orders */

pub async fn add_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderChange>,
) -> WebResult<(StatusCode, Json<Order>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn fetch_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Order>> {
    let order = Order::fetch_by_id(id, &state.db)?.ok_or(WebError::NotFound("Order"))?;
    Ok(Json(order))
}

pub async fn orders_by_buyer(
    State(state): State<AppState>,
    Path(buyer_id): Path<i32>,
) -> WebResult<Json<Vec<Order>>> {
    Ok(Json(Order::fetch_by_buyer(buyer_id, &state.db)?))
}

/// Merge-patch update: absent fields leave the stored order untouched.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OrderChange>,
) -> WebResult<Json<Order>> {
    let order = Order::update(id, &payload, &state.db)?.ok_or(WebError::NotFound("Order"))?;
    Ok(Json(order))
}

pub async fn remove_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Value>> {
    if Order::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Order"));
    }
    Ok(Json(json!({"message": "Order deleted successfully"})))
}
