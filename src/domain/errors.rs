//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The first two variants are
//! user-facing and recoverable: the form stays in place for correction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Submission with lawyer, date, or time missing.
    #[error("Please select all required fields")]
    IncompleteSelection,

    /// The (lawyer, date, time) slot was booked between listing and submission.
    #[error("Appointment not available")]
    SlotTaken,

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Input error: {0}")]
    Input(String),
}
