//! Password-reset verification codes.
//!
//! Codes are four-digit numbers (0 through 9999, zero-padded for display)
//! valid for twenty minutes. Issuing a new code never invalidates earlier
//! ones; validation only ever consults the newest code for the email, and a
//! successful validation does not consume it, so the same code verifies any
//! number of times until it expires.

use chrono::{DateTime, TimeDelta, Utc};
use procura_models::{
    db::connection::DbConnection,
    user::{
        user::User,
        verification_code::{NewVerificationCode, VerificationCode},
    },
};
use rand::Rng;
use tracing::info;

use crate::prelude::*;

/// How long an issued code stays valid.
pub const CODE_TTL_MINUTES: i64 = 20;

/// Generates a code in `0..=9999` together with its expiry instant.
pub fn generate_code() -> (i32, DateTime<Utc>) {
    let code = rand::thread_rng().gen_range(0..10_000);
    let expires_at = Utc::now() + TimeDelta::minutes(CODE_TTL_MINUTES);
    (code, expires_at)
}

/// Issues and persists a fresh code for a registered email.
pub fn issue_code(target: &str, connection: &DbConnection) -> Result<VerificationCode> {
    if User::fetch_by_email(target, connection)?.is_none() {
        return Err(Error::EmailNotFound);
    }

    let (code, expires_at) = generate_code();
    let record = NewVerificationCode {
        email: String::from(target),
        code,
        expires_at,
    }
    .save(connection)?;

    info!("Issued verification code for {target}");
    Ok(record)
}

/// Checks a submitted code against a stored record at a given instant.
///
/// The value is compared before the expiry, so a wrong code reports a
/// mismatch even when the stored code has already expired. Expiry is
/// strictly-after: a code checked exactly at its expiry instant still passes.
pub fn check_code(record: &VerificationCode, submitted: i32, now: DateTime<Utc>) -> Result<()> {
    if record.code != submitted {
        return Err(Error::CodeMismatch);
    }
    if now > record.expires_at {
        return Err(Error::CodeExpired);
    }
    Ok(())
}

/// Validates a submitted code for an email against the newest stored code.
pub fn validate_code(target: &str, submitted: i32, connection: &DbConnection) -> Result<()> {
    if User::fetch_by_email(target, connection)?.is_none() {
        return Err(Error::EmailNotFound);
    }
    let record =
        VerificationCode::latest_for_email(target, connection)?.ok_or(Error::NoCodeIssued)?;
    check_code(&record, submitted, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: i32, expires_at: DateTime<Utc>) -> VerificationCode {
        VerificationCode {
            id: 1,
            email: String::from("ana@procura.st"),
            code,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn generated_codes_fit_four_digits() {
        for _ in 0..100 {
            let (code, expires_at) = generate_code();
            assert!((0..10_000).contains(&code));
            assert!(expires_at > Utc::now());
        }
    }

    #[test]
    fn matching_live_code_passes() {
        let now = Utc::now();
        let record = record(1234, now + TimeDelta::minutes(5));
        assert!(check_code(&record, 1234, now).is_ok());
    }

    #[test]
    fn code_at_exact_expiry_instant_still_passes() {
        let now = Utc::now();
        let record = record(1234, now);
        assert!(check_code(&record, 1234, now).is_ok());
        assert!(matches!(
            check_code(&record, 1234, now + TimeDelta::seconds(1)),
            Err(Error::CodeExpired)
        ));
    }

    #[test]
    fn wrong_code_reports_mismatch_even_after_expiry() {
        let now = Utc::now();
        let record = record(1234, now - TimeDelta::minutes(1));
        assert!(matches!(
            check_code(&record, 9999, now),
            Err(Error::CodeMismatch)
        ));
    }

    #[test]
    fn validation_does_not_consume_the_code() {
        let now = Utc::now();
        let record = record(42, now + TimeDelta::minutes(5));
        assert!(check_code(&record, 42, now).is_ok());
        assert!(check_code(&record, 42, now).is_ok());
    }
}
