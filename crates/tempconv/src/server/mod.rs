mod cli;
mod routes;

pub use cli::App;

use crate::prelude::{eprintln, *};
use tokio::net::TcpListener;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Starting Temperature Converter on {addr}...");
    }

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    log::info!("Temperature Converter listening on http://{addr}");
    log::debug!("Conversion endpoint: http://{addr}/convert");
    log::debug!("Health endpoint: http://{addr}/health");

    axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Server)?;

    log::info!("Temperature Converter stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
