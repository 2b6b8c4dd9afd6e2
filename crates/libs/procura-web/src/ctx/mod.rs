//! Request context for authenticated handlers.

pub mod resolver;

/// Context attached to a request that presented a valid bearer token.
#[derive(Clone, Debug)]
pub struct Ctx {
    /// The authenticated user's id (the token subject).
    pub user_id: i32,
    /// The raw bearer token the request presented.
    pub token: String,
}
