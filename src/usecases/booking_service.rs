//! Booking logic: resolve candidate slots, check conflicts, append to the ledger.
//!
//! - `available_slots` maps the date to a weekday and reads the template
//! - `is_free` scans the ledger for an exact (lawyer, date, time) match
//! - `book` re-runs the conflict check at submission, then appends
//!
//! Dates compare as calendar days (`NaiveDate`), so two bookings on the same
//! day always collide regardless of how the date was produced.

use crate::domain::{Appointment, BookingDraft, DomainError, Lawyer};
use crate::ports::{CatalogPort, LedgerPort};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// One candidate slot for the UI: template time plus taken status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOption {
    pub time: String,
    pub taken: bool,
}

/// Booking service. Coordinates catalog lookups, conflict checks and the
/// append-only ledger.
pub struct BookingService {
    catalog: Arc<dyn CatalogPort>,
    ledger: Arc<dyn LedgerPort>,
}

impl BookingService {
    pub fn new(catalog: Arc<dyn CatalogPort>, ledger: Arc<dyn LedgerPort>) -> Self {
        Self { catalog, ledger }
    }

    /// Specialty tags offered by the catalog.
    pub async fn specialties(&self) -> Result<Vec<String>, DomainError> {
        self.catalog.specialties().await
    }

    /// Lawyers offering the given specialty, in catalog order.
    pub async fn lawyers_for_specialty(
        &self,
        specialty: &str,
    ) -> Result<Vec<Lawyer>, DomainError> {
        let lawyers = self.catalog.lawyers().await?;
        Ok(lawyers.into_iter().filter(|l| l.offers(specialty)).collect())
    }

    /// Template slot times for the weekday of `date`. Empty when the lawyer
    /// has no entries for that weekday — never an error.
    pub fn available_slots(&self, lawyer: &Lawyer, date: NaiveDate) -> Vec<String> {
        lawyer.slots_on(date).to_vec()
    }

    /// True iff no recorded appointment matches (lawyer, date, time).
    pub async fn is_free(
        &self,
        lawyer_id: u32,
        date: NaiveDate,
        time: &str,
    ) -> Result<bool, DomainError> {
        let booked = self.ledger.all().await?;
        Ok(!booked
            .iter()
            .any(|a| a.lawyer_id == lawyer_id && a.date == date && a.time == time))
    }

    /// Candidate slots for the UI, each annotated with its taken status.
    pub async fn slot_listing(
        &self,
        lawyer: &Lawyer,
        date: NaiveDate,
    ) -> Result<Vec<SlotOption>, DomainError> {
        let mut listing = Vec::new();
        for time in lawyer.slots_on(date) {
            let taken = !self.is_free(lawyer.id, date, time).await?;
            listing.push(SlotOption {
                time: time.clone(),
                taken,
            });
        }
        debug!(
            lawyer_id = lawyer.id,
            date = %date,
            slots = listing.len(),
            "resolved candidate slots"
        );
        Ok(listing)
    }

    /// Submit a booking. Re-runs the conflict check (the slot may have been
    /// taken between listing and submission), then appends to the ledger.
    pub async fn book(&self, draft: &BookingDraft) -> Result<Appointment, DomainError> {
        let (Some(specialty), Some(lawyer), Some(date), Some(time)) = (
            draft.specialty.as_deref(),
            draft.lawyer.as_ref(),
            draft.date,
            draft.time.as_deref(),
        ) else {
            return Err(DomainError::IncompleteSelection);
        };

        if !self.is_free(lawyer.id, date, time).await? {
            return Err(DomainError::SlotTaken);
        }

        let appointment = Appointment {
            id: Utc::now().timestamp_millis(),
            lawyer_id: lawyer.id,
            lawyer_name: lawyer.name.clone(),
            date,
            time: time.to_string(),
            specialty: specialty.to_string(),
            cost: lawyer.cost_per_appointment,
        };
        self.ledger.record(appointment.clone()).await?;
        info!(
            lawyer_id = lawyer.id,
            date = %date,
            time,
            cost = appointment.cost,
            "appointment booked"
        );
        Ok(appointment)
    }

    /// Booking history, in insertion order.
    pub async fn history(&self) -> Result<Vec<Appointment>, DomainError> {
        self.ledger.all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::{CatalogData, StaticCatalog};
    use crate::adapters::persistence::MemoryLedger;
    use std::collections::BTreeMap;

    fn monday() -> NaiveDate {
        // 2024-01-01 was a Monday.
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn test_lawyer() -> Lawyer {
        let mut availability = BTreeMap::new();
        availability.insert(
            crate::domain::Weekday::Monday,
            vec!["09:00".to_string(), "09:30".to_string()],
        );
        Lawyer {
            id: 1,
            name: "Ganesh".into(),
            specialties: vec!["Criminal Law".into(), "Property Law".into()],
            availability,
            cost_per_appointment: 200,
        }
    }

    fn service() -> BookingService {
        let catalog = StaticCatalog::new(CatalogData {
            specialties: Vec::new(),
            lawyers: vec![test_lawyer()],
        });
        BookingService::new(Arc::new(catalog), Arc::new(MemoryLedger::new()))
    }

    fn ready_draft(time: &str) -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.select_specialty("Criminal Law".into());
        draft.select_lawyer(test_lawyer());
        draft.select_date(monday());
        draft.select_time(time.into());
        draft
    }

    #[tokio::test]
    async fn available_slots_follow_weekday_template() {
        let svc = service();
        let lawyer = test_lawyer();

        assert_eq!(svc.available_slots(&lawyer, monday()), ["09:00", "09:30"]);

        // Sunday is absent from the template -> empty sequence.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert!(svc.available_slots(&lawyer, sunday).is_empty());
    }

    #[tokio::test]
    async fn lawyers_filtered_by_specialty() {
        let svc = service();
        assert_eq!(svc.lawyers_for_specialty("Criminal Law").await.unwrap().len(), 1);
        assert!(svc.lawyers_for_specialty("Family Law").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_free_slot_appends_one_appointment() {
        let svc = service();
        let appt = svc.book(&ready_draft("09:00")).await.unwrap();

        assert_eq!(appt.lawyer_id, 1);
        assert_eq!(appt.lawyer_name, "Ganesh");
        assert_eq!(appt.date, monday());
        assert_eq!(appt.time, "09:00");
        assert_eq!(appt.specialty, "Criminal Law");
        // Cost comes from the lawyer, never from the form.
        assert_eq!(appt.cost, 200);

        let history = svc.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].time, "09:00");
    }

    #[tokio::test]
    async fn recorded_triple_is_no_longer_free() {
        let svc = service();
        svc.book(&ready_draft("09:00")).await.unwrap();

        assert!(!svc.is_free(1, monday(), "09:00").await.unwrap());
        // Any non-matching triple stays free.
        assert!(svc.is_free(1, monday(), "09:30").await.unwrap());
        assert!(svc.is_free(2, monday(), "09:00").await.unwrap());
        let next_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(svc.is_free(1, next_monday, "09:00").await.unwrap());
    }

    #[tokio::test]
    async fn double_booking_rejected_ledger_grows_by_one() {
        let svc = service();
        svc.book(&ready_draft("09:00")).await.unwrap();

        let err = svc.book(&ready_draft("09:00")).await.unwrap_err();
        assert!(matches!(err, DomainError::SlotTaken));
        assert_eq!(svc.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn conflict_leaves_draft_in_place_for_correction() {
        let svc = service();
        svc.book(&ready_draft("09:00")).await.unwrap();

        // Second attempt on the taken slot fails but keeps the selections.
        let mut draft = ready_draft("09:00");
        let err = svc.book(&draft).await.unwrap_err();
        assert!(matches!(err, DomainError::SlotTaken));
        assert!(draft.lawyer.is_some());
        assert_eq!(draft.date, Some(monday()));

        // Correcting only the time on the same draft succeeds.
        draft.select_time("09:30".into());
        svc.book(&draft).await.unwrap();
        assert_eq!(svc.history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn incomplete_draft_never_reaches_the_ledger() {
        let svc = service();

        for draft in [
            BookingDraft::default(),
            {
                let mut d = ready_draft("09:00");
                d.lawyer = None;
                d
            },
            {
                let mut d = ready_draft("09:00");
                d.date = None;
                d
            },
            {
                let mut d = ready_draft("09:00");
                d.time = None;
                d
            },
        ] {
            let err = svc.book(&draft).await.unwrap_err();
            assert!(matches!(err, DomainError::IncompleteSelection));
        }
        assert!(svc.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_marks_booked_slot_taken() {
        let svc = service();
        let lawyer = test_lawyer();

        let before = svc.slot_listing(&lawyer, monday()).await.unwrap();
        assert!(before.iter().all(|s| !s.taken));

        svc.book(&ready_draft("09:00")).await.unwrap();

        let after = svc.slot_listing(&lawyer, monday()).await.unwrap();
        assert_eq!(
            after,
            vec![
                SlotOption {
                    time: "09:00".into(),
                    taken: true
                },
                SlotOption {
                    time: "09:30".into(),
                    taken: false
                },
            ]
        );
    }
}
