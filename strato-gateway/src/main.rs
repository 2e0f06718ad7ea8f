//! Entry point for the `strato-gateway` HTTP server.

use std::sync::Arc;

use strato_cloud::{
    HttpIdentityProvider, HttpNetworkProvisioner, HttpRecordStore, MemoryRecordStore,
    RecordStore,
};
use strato_gateway::{routes::create_router, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("STRATO_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3460".to_owned());

    let provisioner = std::env::var("STRATO_NETWORK_API")
        .map_or_else(|_| HttpNetworkProvisioner::with_defaults(), HttpNetworkProvisioner::new);

    let identity = std::env::var("STRATO_IDENTITY_API")
        .map_or_else(|_| HttpIdentityProvider::with_defaults(), HttpIdentityProvider::new);

    let store: Arc<dyn RecordStore> = match std::env::var("STRATO_STORE_API") {
        Ok(endpoint) => Arc::new(HttpRecordStore::new(endpoint)),
        Err(_) => {
            info!("STRATO_STORE_API not set, records are kept in memory");
            Arc::new(MemoryRecordStore::new())
        }
    };

    let state = Arc::new(AppState::new(Arc::new(provisioner), store, Arc::new(identity)));
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "strato-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
