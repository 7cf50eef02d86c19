//! Implements LedgerPort with a process-local, append-only list.
//!
//! Volatile: bookings do not survive a restart. The lock only satisfies the
//! Send + Sync bound on the port; the single UI flow never contends on it.

use crate::domain::{Appointment, DomainError};
use crate::ports::LedgerPort;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory appointment ledger.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    appointments: RwLock<Vec<Appointment>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LedgerPort for MemoryLedger {
    async fn record(&self, appointment: Appointment) -> Result<(), DomainError> {
        debug!(
            id = appointment.id,
            lawyer_id = appointment.lawyer_id,
            date = %appointment.date,
            time = %appointment.time,
            "recording appointment"
        );
        self.appointments.write().await.push(appointment);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.appointments.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn appointment(id: i64, time: &str) -> Appointment {
        Appointment {
            id,
            lawyer_id: 1,
            lawyer_name: "Ganesh".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: time.into(),
            specialty: "Criminal Law".into(),
            cost: 200,
        }
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let ledger = MemoryLedger::new();
        ledger.record(appointment(1, "09:00")).await.unwrap();
        ledger.record(appointment(2, "09:30")).await.unwrap();
        ledger.record(appointment(3, "10:00")).await.unwrap();

        let all = ledger.all().await.unwrap();
        assert_eq!(
            all.iter().map(|a| a.id).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[tokio::test]
    async fn starts_empty() {
        assert!(MemoryLedger::new().all().await.unwrap().is_empty());
    }
}
