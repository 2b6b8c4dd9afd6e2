//! Authentication primitives for the Procura marketplace backend.
//!
//! Provides password hashing (argon2) and JWT issuance/verification used by
//! the web layer for bearer authentication.

pub mod auth_body;
pub mod error;
pub mod jwt;
pub mod password;
pub mod prelude;

/// HTTP header carrying the bearer token.
pub const AUTH_HEADER: &str = "Authorization";
/// Prefix of the `Authorization` header value for the bearer scheme.
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";
/// Token type reported in authentication responses.
pub const TOKEN_TYPE: &str = "Bearer";
/// Issuer claim stamped on every token.
pub const ISS: &str = "procura";
