//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod budget;
pub mod categories;
pub mod health;
pub mod records;
pub mod reports;

// Re-export all handlers for use in router
pub use budget::*;
pub use categories::*;
pub use health::*;
pub use records::*;
pub use reports::*;

use crate::AppError;

/// Map core library errors onto HTTP statuses: validation failures are
/// client errors, missing targets are 404s, anything else is sanitized
/// to a 500.
pub(crate) fn core_error(err: tally_core::Error) -> AppError {
    match err {
        tally_core::Error::InvalidData(msg) => AppError::bad_request(&msg),
        tally_core::Error::NotFound(msg) => AppError::not_found(&msg),
        other => other.into(),
    }
}
