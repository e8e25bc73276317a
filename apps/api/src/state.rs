use crate::services::{JobService, PersonService};

/// Shared application state injected into all route handlers via Axum
/// extractors. Services are constructed once in `main` and passed down
/// explicitly; there is no ambient global wiring.
#[derive(Clone)]
pub struct AppState {
    pub persons: PersonService,
    pub jobs: JobService,
}
