//! ChangeDoc HTTP service
//!
//! `POST /generate` resolves the request body, runs the engine pipeline and
//! answers `{ "result": ... }` or `{ "error": ... }`. `GET /healthz` reports
//! the configured advisory backend.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{AdvisoryBackend, Cli};
pub use error::ApiError;
pub use routes::{router, AppState};
