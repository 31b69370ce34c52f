use std::sync::Arc;

use gardenkit::{init_logging, JsonFileStore, PlannerConfig, PlannerSession};
use tracing::info;

/// Prints the bed layout of the stored plan as SVG, followed by the frost
/// windows of the cached temperature history if there is one.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("GardenKit {} ({})", gardenkit::VERSION, gardenkit::BUILD_DATE);

    let config = match std::env::args().nth(1) {
        Some(path) => PlannerConfig::load_from_file(std::path::Path::new(&path))?,
        None => PlannerConfig::load_or_default(&PlannerConfig::default_path()?)?,
    };
    let store = Arc::new(JsonFileStore::new(&config.storage.data_directory));
    let session = PlannerSession::open(store, config).await;

    println!("{}", session.render_svg());

    if let Some(windows) = session
        .temperature_history()
        .and_then(|history| history.frost_windows(session.config().weather.low_risk_threshold))
    {
        println!(
            "Frost free: {} to {}",
            windows.frost_free.first, windows.frost_free.last
        );
        println!(
            "Low risk:   {} to {}",
            windows.low_risk.first, windows.low_risk.last
        );
    }

    Ok(())
}
