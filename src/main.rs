//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use lexbook::adapters::catalog::StaticCatalog;
use lexbook::adapters::persistence::MemoryLedger;
use lexbook::adapters::ui::tui::TuiInputPort;
use lexbook::ports::{CatalogPort, InputPort, LedgerPort};
use lexbook::shared::config::AppConfig;
use lexbook::usecases::BookingService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    lexbook::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Catalog: embedded by default, file-backed when LEXBOOK_CATALOG is set ---
    let catalog: Arc<dyn CatalogPort> = match cfg.catalog.as_deref() {
        Some(path) => {
            info!(path, "loading catalog from file");
            Arc::new(
                StaticCatalog::load(path)
                    .await
                    .map_err(|e| anyhow::anyhow!("{}", e))?,
            )
        }
        None => Arc::new(StaticCatalog::embedded().map_err(|e| anyhow::anyhow!("{}", e))?),
    };

    // --- Ledger: volatile, owned here and injected by reference ---
    let ledger: Arc<dyn LedgerPort> = Arc::new(MemoryLedger::new());

    // --- Services ---
    let booking = Arc::new(BookingService::new(Arc::clone(&catalog), Arc::clone(&ledger)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        booking,
        cfg.booking_window_days_or_default(),
    ));

    // --- Run (main menu -> Book appointment / Appointment history) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
