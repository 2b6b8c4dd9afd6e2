//! Email and password-reset flow handlers.
//!
//! Deliveries are fire-and-forget: the handler spawns the SMTP send and
//! answers immediately, so a slow relay never blocks the request.

use axum::{Json, extract::State};
use procura_mailer::mailer::EmailMessage;
use procura_web::{
    account::{self, ChangePasswordRequest},
    prelude::Result as WebResult,
    verification,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: i32,
}

pub async fn send_email(
    State(state): State<AppState>,
    Json(payload): Json<EmailMessage>,
) -> Json<Value> {
    tokio::spawn(async move {
        if let Err(err) = state.mailer.send(&payload).await {
            error!("Failed to send email: {err}");
        }
    });
    Json(json!({"message": "Email sent successfully"}))
}

/// Issues a verification code for a registered email and mails it out.
///
/// The code is also echoed in the response body. That mirrors the behavior
/// this service replaces; clients rely on it, even though it lets a caller
/// reset a password without reading the email.
pub async fn send_code(
    State(state): State<AppState>,
    Json(payload): Json<SendCodeRequest>,
) -> WebResult<Json<Value>> {
    let record = verification::issue_code(&payload.email, &state.db)?;

    let code = record.code;
    tokio::spawn(async move {
        if let Err(err) = state
            .mailer
            .send_verification_code(&payload.email, code)
            .await
        {
            error!("Failed to send verification code: {err}");
        }
    });

    Ok(Json(json!({"code": record.code})))
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCodeRequest>,
) -> WebResult<Json<Value>> {
    verification::validate_code(&payload.email, payload.code, &state.db)?;
    Ok(Json(json!({"detail": "The verification code is valid."})))
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> WebResult<Json<Value>> {
    account::change_password(&payload, &state.db)?;
    Ok(Json(json!({"detail": "Password changed successfully."})))
}
