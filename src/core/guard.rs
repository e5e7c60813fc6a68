//! Confirmation gate for the destructive delete-all operation.
//!
//! The code is a static value from the configuration file and is a UX
//! confirmation, not a security control: no hashing, no rate limiting.
//! Do not harden this without a requirements change.

use crate::errors::{AppError, AppResult};

/// Authorizes exactly one delete-all when `token` matches the configured
/// code. On mismatch the caller must not touch the store.
pub fn authorize(token: &str, code: &str) -> AppResult<()> {
    if token == code {
        Ok(())
    } else {
        Err(AppError::GuardDenied)
    }
}
