//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Appointment, DomainError, Lawyer};

/// Catalog port. Read-only lawyer directory.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// All lawyers, in catalog order.
    async fn lawyers(&self) -> Result<Vec<Lawyer>, DomainError>;

    /// Distinct specialty tags, in catalog order.
    async fn specialties(&self) -> Result<Vec<String>, DomainError>;
}

/// Ledger port. Append-only record of confirmed appointments.
#[async_trait::async_trait]
pub trait LedgerPort: Send + Sync {
    /// Append unconditionally. Callers run the conflict check first;
    /// the ledger itself enforces nothing.
    async fn record(&self, appointment: Appointment) -> Result<(), DomainError>;

    /// All appointments, in insertion order.
    async fn all(&self) -> Result<Vec<Appointment>, DomainError>;
}
