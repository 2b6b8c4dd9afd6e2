//! Address CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use procura_models::geo::address::{Address, NewAddress};
use procura_web::prelude::{Error as WebError, Result as WebResult};

use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> WebResult<Json<Vec<Address>>> {
    Ok(Json(Address::fetch_all(&state.db)?))
}

pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewAddress>,
) -> WebResult<(StatusCode, Json<Address>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Json<Address>> {
    let address = Address::fetch_by_id(id, &state.db)?.ok_or(WebError::NotFound("Address"))?;
    Ok(Json(address))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<NewAddress>,
) -> WebResult<Json<Address>> {
    let address =
        Address::update(id, &payload, &state.db)?.ok_or(WebError::NotFound("Address"))?;
    Ok(Json(address))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> WebResult<StatusCode> {
    if Address::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Address"));
    }
    Ok(StatusCode::NO_CONTENT)
}
