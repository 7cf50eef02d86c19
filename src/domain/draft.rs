//! Booking draft: transient selection state for one booking attempt.
//!
//! Candidate times depend on both the lawyer and the date, so downstream
//! fields are cleared whenever an upstream selection changes. The draft is
//! discarded after each attempt; the ledger is the only durable state.

use crate::domain::Lawyer;
use chrono::NaiveDate;

/// Where the booking form currently stands. Derived from which fields
/// are filled in, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    SelectingSpecialty,
    SelectingLawyer,
    SelectingDate,
    SelectingTime,
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub specialty: Option<String>,
    pub lawyer: Option<Lawyer>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingDraft {
    /// Picking a specialty clears the lawyer and time: the previously
    /// selected lawyer may not offer the new specialty.
    pub fn select_specialty(&mut self, specialty: String) {
        self.specialty = Some(specialty);
        self.lawyer = None;
        self.time = None;
    }

    /// Picking a lawyer clears any previously selected time.
    pub fn select_lawyer(&mut self, lawyer: Lawyer) {
        self.lawyer = Some(lawyer);
        self.time = None;
    }

    /// Changing the date clears the selected time.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.date != Some(date) {
            self.time = None;
        }
        self.date = Some(date);
    }

    pub fn select_time(&mut self, time: String) {
        self.time = Some(time);
    }

    pub fn stage(&self) -> BookingStage {
        if self.specialty.is_none() {
            BookingStage::SelectingSpecialty
        } else if self.lawyer.is_none() {
            BookingStage::SelectingLawyer
        } else if self.date.is_none() {
            BookingStage::SelectingDate
        } else if self.time.is_none() {
            BookingStage::SelectingTime
        } else {
            BookingStage::Ready
        }
    }
}
