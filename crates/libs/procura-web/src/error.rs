//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] procura_models::error::Error),

    #[error(transparent)]
    Auth(#[from] procura_auth::error::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Auth Token Creation")]
    AuthTokenCreation,

    /* Credential errors */
    #[error("Unknown Email")]
    UnknownEmail,

    #[error("Wrong Password")]
    WrongPassword,

    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Context Missing")]
    CtxMissing,

    #[error("User Not Found")]
    UserNotFound,

    /* Account validation */
    #[error("Invalid Email")]
    InvalidEmail,

    #[error("Invalid Role")]
    InvalidRole,

    #[error("Email Taken")]
    EmailTaken,

    #[error("Password Mismatch")]
    PasswordMismatch,

    /* Verification codes */
    #[error("Email Not Found")]
    EmailNotFound,

    #[error("No Code Issued")]
    NoCodeIssued,

    #[error("Code Mismatch")]
    CodeMismatch,

    #[error("Code Expired")]
    CodeExpired,

    /* Marketplace */
    #[error("Already Reviewed")]
    AlreadyReviewed,

    #[error("{0} Not Found")]
    NotFound(&'static str),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::UnknownEmail => (StatusCode::BAD_REQUEST, "Incorrect email."),
            Error::WrongPassword => (StatusCode::BAD_REQUEST, "Incorrect password."),
            Error::MissingCredentials | Error::CtxMissing => {
                (StatusCode::FORBIDDEN, "Invalid authorization code.")
            }
            Error::UserNotFound => (StatusCode::NOT_FOUND, "User not found."),
            Error::InvalidEmail => (StatusCode::BAD_REQUEST, "The provided email is not valid."),
            Error::InvalidRole => (
                StatusCode::BAD_REQUEST,
                "The provided user type is not valid.",
            ),
            Error::EmailTaken => (StatusCode::BAD_REQUEST, "The email is already registered."),
            Error::PasswordMismatch => {
                (StatusCode::BAD_REQUEST, "The provided passwords do not match.")
            }
            Error::EmailNotFound => (StatusCode::NOT_FOUND, "Email not found."),
            Error::NoCodeIssued => (
                StatusCode::BAD_REQUEST,
                "No verification code was generated for this email.",
            ),
            Error::CodeMismatch => (StatusCode::BAD_REQUEST, "The verification code is invalid."),
            Error::CodeExpired => (StatusCode::BAD_REQUEST, "The verification code has expired."),
            Error::AlreadyReviewed => (
                StatusCode::BAD_REQUEST,
                "The buyer has already reviewed this seller.",
            ),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found."),
            Error::Auth(err) => match err {
                procura_auth::error::Error::InvalidScheme => {
                    (StatusCode::FORBIDDEN, "Invalid authentication scheme.")
                }
                procura_auth::error::Error::TokenMissing => {
                    (StatusCode::FORBIDDEN, "Invalid authorization code.")
                }
                procura_auth::error::Error::InvalidToken
                | procura_auth::error::Error::TokenExpired => {
                    (StatusCode::FORBIDDEN, "Invalid token or expired token.")
                }
                procura_auth::error::Error::TokenCreation(_)
                | procura_auth::error::Error::PasswordHash(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
            Error::AuthTokenCreation | Error::Json(_) | Error::Models(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
