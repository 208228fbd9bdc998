use anyhow::Context;
use tracing::info;

use cadence_infrastructure::logging;
use cadence_server::config::AppConfig;
use cadence_server::presentation::{bootstrap, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init_logger(config.log_dir.clone())?;

    info!(
        target: "cadence::bootstrap",
        bind = %config.bind_addr,
        database = %config.database_path.display(),
        "Starting cadence server"
    );

    let state = bootstrap::build_app_state(&config).await?;

    if config.reminders_enabled {
        state.reminder_scheduler.start().await?;
    } else {
        info!(target: "cadence::bootstrap", "Reminder scheduler disabled by configuration");
    }

    let scheduler = state.reminder_scheduler.clone();
    let app = routes::api_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(target: "cadence::bootstrap", addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    scheduler.shutdown().await;
    info!(target: "cadence::bootstrap", "Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "cadence::bootstrap", error = %e, "Failed to listen for ctrl-c");
    }
}
