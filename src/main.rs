use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::server::make_app;
use crate::store::LibraryStore;

#[cfg(test)]
mod client;
mod config;
mod datamodel;
mod error;
mod server;
mod store;
mod telemetry;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::load()?;
    telemetry::install(&config.log.filter)?;

    let store = LibraryStore::seeded().into_shared();
    let app = make_app(store);

    let listener = tokio::net::TcpListener::bind(config.server.address).await?;
    info!("Server ready at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
