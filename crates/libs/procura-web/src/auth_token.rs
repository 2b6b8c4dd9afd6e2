//! Bearer token issuance and verification.
//!
//! Token TTL comes from `ACCESS_TOKEN_EXPIRE_MINUTES` (default 10080, one
//! week). Verification is a pure cryptographic check: signature, structure,
//! and expiry. It never consults the database, so clearing a user's stored
//! token at logout does not revoke an already-issued token.

use std::sync::LazyLock;

use crate::prelude::*;
use chrono::{TimeDelta, Utc};
use procura_auth::{
    ISS,
    auth_body::AuthBody,
    jwt::{jwt_decode, jwt_encode},
    password::is_password_valid,
};
use procura_models::{db::connection::DbConnection, user::user::User};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Access token lifetime, `ACCESS_TOKEN_EXPIRE_MINUTES` or one week.
static TOKEN_TTL: LazyLock<TimeDelta> = LazyLock::new(|| {
    let minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10080);
    TimeDelta::minutes(minutes)
});

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    /// Subject (user id).
    pub sub: i32,
    /// Issuer.
    pub iss: String,
    /// Expiration time.
    pub exp: i64,
    /// Issued at time.
    pub iat: i64,
}

impl AuthToken {
    /// Creates claims for a user with the configured TTL.
    pub fn new(user_id: i32) -> Result<Self> {
        Self::with_ttl(user_id, *TOKEN_TTL)
    }

    /// Creates claims for a user with an explicit TTL.
    pub fn with_ttl(user_id: i32, ttl: TimeDelta) -> Result<Self> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(ttl)
            .ok_or(Error::AuthTokenCreation)?;

        Ok(Self {
            sub: user_id,
            iss: String::from(ISS),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        })
    }

    /// Whether the claims are expired at `now`. A token whose expiry equals
    /// the current second is already expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Verifies login credentials against the stored user record.
pub fn authenticate(email: &str, password: &str, connection: &DbConnection) -> Result<User> {
    let user = User::fetch_by_email(email, connection)?.ok_or(Error::UnknownEmail)?;
    if !is_password_valid(password, &user.password_hash)? {
        warn!("Failed login attempt for email: {email}");
        return Err(Error::WrongPassword);
    }
    Ok(user)
}

/// Encodes claims into a signed bearer token.
pub fn encode_token(token: &AuthToken) -> Result<AuthBody> {
    let token = jwt_encode(&token).map_err(|err| {
        error!("Failed to encode JWT {err}");
        err
    })?;

    Ok(AuthBody::new(token))
}

/// Decodes a bearer token and enforces expiry.
///
/// Signature or structure problems surface as `InvalidToken`; a token at or
/// past its expiry surfaces as `TokenExpired`.
pub fn decode_token(token: &str) -> Result<AuthToken> {
    let claims = jwt_decode::<AuthToken>(token)
        .map_err(|_| procura_auth::error::Error::InvalidToken)?
        .claims;
    if claims.is_expired_at(Utc::now().timestamp()) {
        return Err(procura_auth::error::Error::TokenExpired.into());
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_secret() {
        unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
    }

    #[test]
    #[serial]
    fn issued_token_decodes_to_same_subject() {
        set_secret();
        let claims = AuthToken::new(42).unwrap();
        let body = encode_token(&claims).unwrap();
        let decoded = decode_token(&body.access_token).unwrap();
        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.iss, ISS);
    }

    #[test]
    #[serial]
    fn tampered_token_is_invalid() {
        set_secret();
        let claims = AuthToken::new(42).unwrap();
        let body = encode_token(&claims).unwrap();
        let mut token = body.access_token;
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });
        assert!(matches!(
            decode_token(&token),
            Err(Error::Auth(procura_auth::error::Error::InvalidToken))
        ));
    }

    #[test]
    #[serial]
    fn expiry_boundary_is_exclusive_of_validity() {
        let now = Utc::now().timestamp();
        let claims = AuthToken::with_ttl(1, TimeDelta::minutes(5)).unwrap();
        assert!(!claims.is_expired_at(now));
        assert!(claims.is_expired_at(claims.exp));
        assert!(claims.is_expired_at(claims.exp + 1));
    }

    #[test]
    #[serial]
    fn expired_token_is_reported_as_expired() {
        set_secret();
        // jsonwebtoken's own validation has a default leeway, so an expiry a
        // few seconds in the past must still be caught by the explicit check.
        let mut claims = AuthToken::new(42).unwrap();
        claims.exp = Utc::now().timestamp() - 5;
        let body = encode_token(&claims).unwrap();
        assert!(matches!(
            decode_token(&body.access_token),
            Err(Error::Auth(procura_auth::error::Error::TokenExpired))
        ));
    }
}
