//! Account flows: registration, login, logout, and password changes.

use std::sync::LazyLock;

use crate::auth_token::{AuthToken, authenticate, encode_token};
use crate::ctx::Ctx;
use crate::prelude::*;
use procura_auth::{auth_body::AuthBody, password::generate_password_hash};
use procura_models::{
    db::connection::DbConnection,
    user::user::{NewUser, User},
};
use regex::Regex;
use serde::Deserialize;
use tracing::info;

/// Roles an account may register with.
pub const ALLOWED_ROLES: [&str; 3] = ["Buyer", "Seller", "Admin"];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\.-]+@[\w\.-]+\.\w+$").expect("email regex must compile"));

/// Login credentials.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_email: String,
    pub password: String,
}

/// Registration payload. The password arrives in plaintext and is hashed
/// before it touches the database.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub company_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub description: Option<String>,
    pub address_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Password-change payload, used by the reset flow after code verification.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub new_password: String,
    pub conf_new_password: String,
    pub email: String,
}

/// True when the address looks like an email. Format only, no delivery check.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}

/// True when the role is one of the accepted account roles. Case sensitive.
pub fn is_valid_role(role: &str) -> bool {
    ALLOWED_ROLES.contains(&role)
}

/// Registers a new account.
///
/// Validates the email format and role, rejects duplicate emails, hashes the
/// password, and stores the row.
pub fn create_user(request: UserCreateRequest, connection: &DbConnection) -> Result<User> {
    if !is_valid_email(&request.email) {
        return Err(Error::InvalidEmail);
    }
    if !is_valid_role(&request.role) {
        return Err(Error::InvalidRole);
    }
    if User::fetch_by_email(&request.email, connection)?.is_some() {
        return Err(Error::EmailTaken);
    }

    let new_user = NewUser {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        role: request.role,
        password_hash: generate_password_hash(&request.password)?,
        gender: request.gender,
        phone_number: request.phone_number,
        image_url: request.image_url,
        company_name: request.company_name,
        date_of_birth: request.date_of_birth,
        description: request.description,
        address_id: request.address_id,
        category_id: request.category_id,
    };

    let user = new_user.save(connection)?;
    info!("Registered user {} ({})", user.id, user.email);
    Ok(user)
}

/// Verifies credentials, issues a token, and records it on the user row.
pub fn login(request: &LoginRequest, connection: &DbConnection) -> Result<AuthBody> {
    let user = authenticate(&request.user_email, &request.password, connection)?;
    let claims = AuthToken::new(user.id)?;
    let body = encode_token(&claims)?;

    User::store_access_token(user.id, &body.access_token, connection)?;
    info!("User {} logged in", user.id);
    Ok(body)
}

/// Clears the stored token copy for the authenticated user.
///
/// Advisory only: the bearer token itself stays valid until it expires.
pub fn logout(ctx: &Ctx, connection: &DbConnection) -> Result<()> {
    let user = User::fetch_by_id(ctx.user_id, connection)?.ok_or(Error::UserNotFound)?;
    User::clear_access_token(user.id, connection)?;
    info!("User {} logged out", user.id);
    Ok(())
}

/// Replaces the password of the account registered under `email`.
///
/// Both password fields must match exactly. Does not require or consume a
/// verification code; the reset flow checks the code in a separate call.
pub fn change_password(request: &ChangePasswordRequest, connection: &DbConnection) -> Result<()> {
    if request.new_password != request.conf_new_password {
        return Err(Error::PasswordMismatch);
    }
    if User::fetch_by_email(&request.email, connection)?.is_none() {
        return Err(Error::EmailNotFound);
    }

    let new_hash = generate_password_hash(&request.new_password)?;
    User::update_password_hash(&request.email, &new_hash, connection)?;
    info!("Password changed for {}", request.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_addresses_pass_the_email_check() {
        assert!(is_valid_email("ana.gomes@procura.st"));
        assert!(is_valid_email("j_silva@mail.example.com"));
    }

    #[test]
    fn malformed_addresses_fail_the_email_check() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@procura.st"));
        assert!(!is_valid_email("two words@procura.st"));
    }

    #[test]
    fn role_check_is_exact_and_case_sensitive() {
        assert!(is_valid_role("Buyer"));
        assert!(is_valid_role("Seller"));
        assert!(is_valid_role("Admin"));
        assert!(!is_valid_role("buyer"));
        assert!(!is_valid_role("Moderator"));
        assert!(!is_valid_role(""));
    }
}
