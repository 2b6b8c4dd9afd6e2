//! Account management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use procura_models::{
    catalog::category::Category,
    db::connection::DbConnection,
    geo::address::Address,
    user::user::{User, UserPatch},
};
use procura_web::{
    account::{self, UserCreateRequest},
    ctx::Ctx,
    prelude::{Error as WebError, Result as WebResult},
};
use serde::{Deserialize, Serialize};

use super::reviews::{SellerReviewDetail, reviews_received};
use crate::state::AppState;

/// A user profile joined with category, country, district, and the reviews
/// the user has received as a seller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub category: Option<String>,
    pub country: Option<String>,
    pub district: Option<String>,
    pub reviews_received: Vec<SellerReviewDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub user_id: Option<i32>,
}

fn detail_user(user: User, db: &DbConnection) -> WebResult<UserDetail> {
    let category = match user.category_id {
        Some(category_id) => Category::fetch_by_id(category_id, db)?.and_then(|c| c.name),
        None => None,
    };
    let (country, district) = match user.address_id {
        Some(address_id) => match Address::fetch_with_country(address_id, db)? {
            Some((address, country)) => (Some(country.name), address.district),
            None => (None, None),
        },
        None => (None, None),
    };
    let reviews = reviews_received(user.id, db)?;

    Ok(UserDetail {
        user,
        category,
        country,
        district,
        reviews_received: reviews,
    })
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> WebResult<Json<Vec<UserDetail>>> {
    let users = match filter.user_id {
        Some(user_id) => User::fetch_by_id(user_id, &state.db)?.into_iter().collect(),
        None => User::fetch_all(&state.db)?,
    };

    users
        .into_iter()
        .map(|user| detail_user(user, &state.db))
        .collect::<WebResult<Vec<_>>>()
        .map(Json)
}

pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<UserCreateRequest>,
) -> WebResult<(StatusCode, Json<User>)> {
    let user = account::create_user(payload, &state.db)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Merge-patch update: only the fields present in the payload overwrite the
/// stored row; everything else is untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UserPatch>,
) -> WebResult<Json<User>> {
    let user = User::apply_patch(id, &patch, &state.db)?.ok_or(WebError::UserNotFound)?;
    Ok(Json(user))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> WebResult<StatusCode> {
    if User::delete(id, &state.db)? == 0 {
        return Err(WebError::UserNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// The profile of the authenticated user, resolved from the bearer token.
pub async fn me(State(state): State<AppState>, ctx: Ctx) -> WebResult<Json<User>> {
    let user = User::fetch_by_id(ctx.user_id, &state.db)?.ok_or(WebError::UserNotFound)?;
    Ok(Json(user))
}

pub async fn sellers_by_category(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
) -> WebResult<Json<Vec<User>>> {
    let category = Category::fetch_by_name(&category_name, &state.db)?
        .ok_or(WebError::NotFound("Category"))?;
    Ok(Json(User::fetch_by_category(category.id, &state.db)?))
}
