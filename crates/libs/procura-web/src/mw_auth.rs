//! Authentication middleware for protecting routes.

use crate::prelude::*;
use axum::{extract::Request, middleware::Next, response::Response};

use super::ctx::Ctx;

/// Middleware that requires a resolved authentication context.
///
/// Rejects the request before the handler runs when the bearer token is
/// missing, malformed, carries a non-Bearer scheme, or fails verification.
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
