use std::sync::Arc;

use anyhow::Result;
use catalog::Catalog;
use domain::services::LogNotificationSink;
use reptile_care_app::{config::Config, logging, metrics, App};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    logging::init_logging(&config.logging)?;

    info!("Starting ReptileCare v{}", env!("CARGO_PKG_VERSION"));

    let prometheus = metrics::init_metrics()?;

    let catalog = Catalog::seeded()?;
    let app = App::new(config, catalog, Arc::new(LogNotificationSink));

    info!(reference_date = %app.reference_date(), "Building dashboard snapshot");

    let admin = app.admin_dashboard();
    let customer = app.customer_dashboard(None)?;

    let snapshot = serde_json::json!({
        "admin": admin.overview(),
        "customer": customer.snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    debug!(metrics = %prometheus.render(), "Metrics snapshot");

    Ok(())
}
