//! Database models and ORM layer for the Procura marketplace.
//!
//! Provides Diesel-based models, queries, and connection management for the
//! relational schema: users and verification codes, geography (countries,
//! addresses), the catalog (categories, products), trade (orders, posts),
//! reviews, and comments.
//!
//! # Usage
//!
//! ```rust,no_run
//! use procura_models::{user::user::User, db::{config::DbConfig, connection::DbConnection}};
//!
//! let config = DbConfig::from_env();
//! let conn = DbConnection::new(&config).setup();
//!
//! let users = User::fetch_all(&conn).unwrap();
//! println!("Found {} users", users.len());
//! ```

pub mod catalog;
pub mod db;
pub mod error;
pub mod geo;
pub mod prelude;
pub mod review;
mod schema;
pub mod social;
pub mod trade;
pub mod user;
