//! Mailer error types.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed sender or recipient address.
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled.
    #[error(transparent)]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure.
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
}
