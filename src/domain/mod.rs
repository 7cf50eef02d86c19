//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod draft;
pub mod entities;
pub mod errors;

pub use draft::{BookingDraft, BookingStage};
pub use entities::{Appointment, Lawyer, Weekday};
pub use errors::DomainError;
