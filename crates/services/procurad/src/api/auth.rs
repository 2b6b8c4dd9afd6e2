//! Login and logout handlers.

use axum::{Json, extract::State};
use procura_auth::auth_body::AuthBody;
use procura_web::{
    account::{self, LoginRequest},
    ctx::Ctx,
    prelude::Result as WebResult,
};
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> WebResult<Json<AuthBody>> {
    Ok(Json(account::login(&payload, &state.db)?))
}

pub async fn logout(State(state): State<AppState>, ctx: Ctx) -> WebResult<Json<Value>> {
    account::logout(&ctx, &state.db)?;
    Ok(Json(json!({"message": "Logout Successfully"})))
}
