use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(settings: Settings) -> Result<()> {
    info!("Inclusion dashboard starting up");
    let settings = settings.resolve_data_dir()?;
    let bind_address = settings.bind_address.clone();
    debug!("Bind address: {}", bind_address);

    let state = AppState::new(settings);

    // The dataset is required; fail before accepting connections.
    let dataset = state.store.dataset().await.with_context(|| {
        format!(
            "Cannot load dataset {}",
            state.store.paths().dataset.display()
        )
    })?;
    info!(
        observations = dataset.observations().len(),
        events = dataset.events().len(),
        "Dataset loaded"
    );

    match state.store.forecast().await {
        Ok(Some(table)) => info!(years = ?table.years(), "Forecast table loaded"),
        Ok(None) => warn!(
            path = %state.store.paths().forecast.display(),
            "Forecast table not found; the Forecasts tab will show a warning"
        ),
        Err(e) => warn!("Forecast table could not be loaded: {}", e),
    }

    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
