use std::sync::Arc;

use crate::config::Config;
use crate::overrides::OverrideTable;
use crate::render::Renderer;
use crate::services::LookupService;
use crate::wikidata::EntitySource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub lookup: LookupService,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn EntitySource>, overrides: OverrideTable) -> Self {
        let config = Arc::new(config);
        let lookup = LookupService::new(source, Arc::new(overrides), &config);
        let renderer = Renderer::from_config(&config.lookup);

        Self {
            config,
            lookup,
            renderer,
        }
    }
}
