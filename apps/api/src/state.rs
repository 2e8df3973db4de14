use crate::generation::service::AiService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// AI task runner. Wraps the completion transport resolved once at startup.
    pub ai: AiService,
}
