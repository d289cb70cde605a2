//! HTTP server

use crate::routes::{router, AppState};
use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

/// Serve until the process is stopped
pub async fn run(state: AppState, bind: SocketAddr) -> Result<()> {
    let advisory = state.advisory.name();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %bind, advisory, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
