use std::sync::Arc;
use honeyrae_core::{Config, RegistryStore};

/// Shared application state
pub struct AppState {
    config: Config,
    registry: Arc<dyn RegistryStore>,
}

impl AppState {
    pub fn new(config: Config, registry: Arc<dyn RegistryStore>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &dyn RegistryStore {
        self.registry.as_ref()
    }
}
