//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI invokes application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session (main menu -> book / history) until the
    /// user quits. User-facing booking errors are handled inside the loop.
    async fn run(&self) -> Result<(), DomainError>;
}
