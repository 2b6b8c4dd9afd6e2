//! JWT management for Procura's bearer authentication.
//!
//! Tokens are signed with a process-wide secret loaded once from the
//! `JWT_SECRET` environment variable. The signing algorithm comes from
//! `JWT_ALGORITHM` and defaults to HS256. Both are deployment configuration;
//! there is no baked-in secret.
//!
//! # Examples
//!
//! ```rust
//! use procura_auth::jwt::{jwt_encode, jwt_decode};
//! use serde::{Serialize, Deserialize};
//! use std::env;
//! unsafe { env::set_var("JWT_SECRET", "MySuperSecret"); }
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct Claims {
//!     sub: i32,
//!     exp: i64,
//! }
//!
//! let claims = Claims { sub: 42, exp: 4118335200 };
//! let token = jwt_encode(&claims).unwrap();
//! let decoded = jwt_decode::<Claims>(&token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use crate::prelude::*;
use std::str::FromStr;
use std::sync::LazyLock;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Serialize, de::DeserializeOwned};

/// Lazily initialized signing keys, loaded once from `JWT_SECRET`.
static KEYS: LazyLock<Keys> = LazyLock::new(|| {
    let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    Keys::new(secret.as_bytes())
});

/// Signing algorithm, `JWT_ALGORITHM` or HS256 when unset.
static ALGORITHM: LazyLock<Algorithm> = LazyLock::new(|| {
    std::env::var("JWT_ALGORITHM")
        .ok()
        .map(|name| Algorithm::from_str(&name).expect("JWT_ALGORITHM is not a valid algorithm"))
        .unwrap_or(Algorithm::HS256)
});

/// Key pair for token signing and verification.
struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Creates a signed JWT from the provided claims.
///
/// Claims are signed for integrity, not encrypted; callers must include an
/// `exp` claim so issued tokens are time-bounded.
pub fn jwt_encode<T>(body: &T) -> Result<String>
where
    T: Serialize,
{
    let header = Header::new(*ALGORITHM);
    Ok(encode(&header, body, &KEYS.encoding)?)
}

/// Validates a JWT's signature and structure and extracts its claims.
///
/// Only tokens signed with the configured secret and algorithm are accepted.
/// A verification failure surfaces as [`Error::TokenCreation`] wrapping the
/// jsonwebtoken cause.
pub fn jwt_decode<T>(token: &str) -> Result<TokenData<T>>
where
    T: DeserializeOwned,
{
    Ok(decode(token, &KEYS.decoding, &Validation::new(*ALGORITHM))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serial_test::serial;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct TestClaims {
        sub: i32,
        exp: i64,
    }

    fn set_secret() {
        unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
    }

    #[test]
    #[serial]
    fn roundtrip_returns_original_claims() {
        set_secret();
        let claims = TestClaims {
            sub: 7,
            exp: 4118335200,
        };
        let token = jwt_encode(&claims).unwrap();
        let decoded = jwt_decode::<TestClaims>(&token).unwrap();
        assert_eq!(decoded.claims, claims);
    }

    #[test]
    #[serial]
    fn tampered_signature_is_rejected() {
        set_secret();
        let claims = TestClaims {
            sub: 7,
            exp: 4118335200,
        };
        let mut token = jwt_encode(&claims).unwrap();
        // Flip the last signature byte.
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });
        assert!(jwt_decode::<TestClaims>(&token).is_err());
    }

    #[test]
    #[serial]
    fn expired_token_is_rejected() {
        set_secret();
        let claims = TestClaims { sub: 7, exp: 1 };
        let token = jwt_encode(&claims).unwrap();
        assert!(jwt_decode::<TestClaims>(&token).is_err());
    }
}
