//! Event Countdown - A small HTTP service that displays a live countdown
//! 
//! This is the main entry point for the event-countdown application.

use std::sync::Arc;
use tokio::{net::TcpListener, runtime::Handle};
use tracing::{debug, info};

use event_countdown::{
    config::Config,
    countdown::TokioScheduler,
    settings,
    state::AppState,
    api::create_router,
    tasks::display_watch_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("event_countdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting event-countdown server v{}", env!("CARGO_PKG_VERSION"));

    let options = settings::sanitize(&config);
    info!("Configuration: host={}, port={}, title={:?}, event={:?}, timezone={}, position={}",
          config.host, config.port, options.title, options.event_instant,
          options.timezone, options.position);

    // Create application state
    let scheduler = Arc::new(TokioScheduler::new(Handle::current()));
    let state = Arc::new(AppState::new(options, scheduler, config.port, config.host.clone()));

    // Log display changes in the background
    tokio::spawn(display_watch_task(state.display.subscribe()));

    // The page exists from here on; a refused start was already logged
    if let Err(e) = state.on_ready() {
        debug!("Continuing without a live countdown: {}", e);
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /          - Countdown page");
    info!("  GET  /countdown - Current countdown as JSON");
    info!("  GET  /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.on_teardown();
    info!("Server shutdown complete");
    Ok(())
}
