//! Best-effort SMTP email delivery for the Procura marketplace.
//!
//! The mailer is a collaborator of the password-reset flow: handlers hand it a
//! message and move on; delivery runs on the async SMTP transport and failures
//! are reported to whoever awaits the send, never retried internally.

pub mod config;
pub mod error;
pub mod mailer;
pub mod prelude;
