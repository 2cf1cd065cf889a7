use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; read-only for the process lifetime.
    pub parser: Arc<ResumeParser>,
    pub config: Config,
}
