use crate::config::Config;
use crate::gateway::Gateway;
use crate::storage::WorkoutStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Gateway,
    pub store: WorkoutStore,
}

impl AppState {
    pub fn new(config: Config, gateway: Gateway) -> Self {
        let store = WorkoutStore::new(config.data_path.clone());
        Self {
            config: Arc::new(config),
            gateway,
            store,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let gateway = Gateway::from_config(&config);
        Self::new(config, gateway)
    }
}
