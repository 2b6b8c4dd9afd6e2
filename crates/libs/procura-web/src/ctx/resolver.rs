//! Context resolver: extracts and verifies the bearer token of a request.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use procura_auth::{AUTH_HEADER, AUTH_HEADER_PREFIX, error::Error as AuthError, jwt::jwt_decode};

use crate::auth_token::AuthToken;
use crate::ctx::Ctx;
use crate::prelude::*;

/// Pulls the bearer token out of the `Authorization` header.
///
/// A missing header is `TokenMissing`; a header with any scheme other than
/// `Bearer` is `InvalidScheme`.
fn bearer_token(headers: &HeaderMap) -> core::result::Result<String, AuthError> {
    let header = headers.get(AUTH_HEADER).ok_or(AuthError::TokenMissing)?;
    let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;
    value
        .strip_prefix(AUTH_HEADER_PREFIX)
        .map(String::from)
        .ok_or(AuthError::InvalidScheme)
}

/// Middleware that resolves the request context from the bearer token.
///
/// The outcome, valid context or the reason it is absent, is stored in the
/// request extensions; route layers and extractors decide whether a failure
/// terminates the request.
pub async fn mw_ctx_resolver(headers: HeaderMap, mut req: Request<Body>, next: Next) -> Response {
    let ctx = bearer_token(&headers).and_then(|token| {
        let claims = jwt_decode::<AuthToken>(&token)
            .map_err(|_| AuthError::InvalidToken)?
            .claims;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::TokenExpired);
        }
        Ok(Ctx {
            user_id: claims.sub,
            token,
        })
    });

    req.extensions_mut().insert(ctx);

    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<core::result::Result<Ctx, AuthError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_header_is_token_missing() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::TokenMissing)
        ));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidScheme)
        ));
    }

    #[test]
    fn bearer_scheme_yields_raw_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
