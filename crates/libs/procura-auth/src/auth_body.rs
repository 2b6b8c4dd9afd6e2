//! Authentication response structure.

use serde::{Deserialize, Serialize};

use super::TOKEN_TYPE;

/// Login response carrying an access token.
///
/// # JSON Format
///
/// ```json
/// {
///   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "tokenType": "Bearer"
/// }
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthBody {
    /// The access token.
    pub access_token: String,
    /// The token type (always "Bearer").
    pub token_type: String,
}

impl AuthBody {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: String::from(TOKEN_TYPE),
        }
    }
}
