//! Password hashing and verification using Argon2.
//!
//! Every hash embeds a fresh random salt, so hashing the same password twice
//! yields different strings. Verification re-derives the hash from the salt
//! and parameters embedded in the stored string.
//!
//! # Examples
//!
//! ```rust
//! use procura_auth::password::{generate_password_hash, is_password_valid};
//!
//! let hash = generate_password_hash("user_password_123").unwrap();
//! assert!(is_password_valid("user_password_123", &hash).unwrap());
//! assert!(!is_password_valid("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Hashes a plaintext password for storage.
///
/// The returned string carries the salt and Argon2 parameters needed for
/// later verification and is safe to persist.
pub fn generate_password_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a plaintext password against a stored hash.
///
/// A wrong password returns `Ok(false)`, never an error; errors are reserved
/// for unparseable hash strings.
pub fn is_password_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_matching_password() {
        let hash = generate_password_hash("secret1").unwrap();
        assert!(is_password_valid("secret1", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = generate_password_hash("secret1").unwrap();
        assert!(!is_password_valid("secret2", &hash).unwrap());
    }

    #[test]
    fn repeated_hashes_differ_but_both_verify() {
        let first = generate_password_hash("secret1").unwrap();
        let second = generate_password_hash("secret1").unwrap();
        assert_ne!(first, second);
        assert!(is_password_valid("secret1", &first).unwrap());
        assert!(is_password_valid("secret1", &second).unwrap());
    }
}
