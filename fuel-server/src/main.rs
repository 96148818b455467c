use std::process::ExitCode;

use tracing::{error, info};

use fuel_server::config::ServerConfig;
use fuel_server::store::{DataFile, StationStore};
use fuel_server::telemetry;
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load stations (seed set if the file is absent or corrupt)
    let store = StationStore::open(DataFile::new(&config.data_file));
    info!(count = store.len().await, "station store ready");

    let app = create_router(AppState::new(store), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Fuel station server listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /api/distributori             - List stations");
    info!("  GET  /api/distributori/{{id}}        - Get a station");
    info!("  POST /api/distributori             - Add a station");
    info!("  GET  /api/distributori/search?q=   - Search stations");
    info!("  PUT  /api/provincia/prezzi         - Update region prices");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
