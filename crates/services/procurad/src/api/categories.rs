//! Service category CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use procura_models::catalog::category::{Category, NewCategory};
use procura_web::prelude::{Error as WebError, Result as WebResult};

use crate::state::AppState;

pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> WebResult<(StatusCode, Json<Category>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn list(State(state): State<AppState>) -> WebResult<Json<Vec<Category>>> {
    Ok(Json(Category::fetch_all(&state.db)?))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Category>> {
    let category = Category::fetch_by_id(id, &state.db)?.ok_or(WebError::NotFound("Category"))?;
    Ok(Json(category))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<NewCategory>,
) -> WebResult<Json<Category>> {
    let category =
        Category::update(id, &payload, &state.db)?.ok_or(WebError::NotFound("Category"))?;
    Ok(Json(category))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> WebResult<StatusCode> {
    if Category::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Category"));
    }
    Ok(StatusCode::NO_CONTENT)
}
