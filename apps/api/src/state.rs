use std::sync::Arc;

use crate::config::Config;
use crate::screening::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable skill taxonomy, loaded once at startup. Read-only behind the
    /// `Arc`, so concurrent request handling needs no coordination.
    pub taxonomy: Arc<SkillTaxonomy>,
}
