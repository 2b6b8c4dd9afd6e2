//! Web authentication and account flows for the Procura marketplace.
//!
//! This library provides bearer-token middleware, request context resolution,
//! the login/logout/password-reset flows, and the verification-code service
//! used by the HTTP service.

pub mod account;
pub mod auth_token;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod prelude;
pub mod verification;
