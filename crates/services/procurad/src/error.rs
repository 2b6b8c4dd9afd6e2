//! Error types for the Procura HTTP service.

/// Errors that can occur while assembling and running the service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::error::Error),

    #[error(transparent)]
    Models(#[from] procura_models::error::Error),

    #[error(transparent)]
    Mailer(#[from] procura_mailer::error::Error),

    #[error(transparent)]
    Web(#[from] procura_web::error::Error),

    #[error(transparent)]
    Axum(#[from] axum::Error),
}
