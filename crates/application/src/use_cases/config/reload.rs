use crate::services::SettingsStore;
use ferrous_synth_domain::{Config, DomainError, ResponderSettings};
use tracing::info;

/// Re-reads the configuration file and publishes a new settings snapshot.
///
/// On any error the previous snapshot stays live.
pub struct ReloadSettingsUseCase {
    store: SettingsStore,
}

impl ReloadSettingsUseCase {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    pub fn execute(&self, config_path: &str) -> Result<Config, DomainError> {
        let new_config = Config::load(Some(config_path), Default::default())
            .map_err(|e| DomainError::ConfigError(format!("Config load error: {}", e)))?;

        new_config
            .validate()
            .map_err(|e| DomainError::ConfigError(format!("Config validation error: {}", e)))?;

        let settings = ResponderSettings::from_config(&new_config.responder)?;
        self.store.publish(settings);

        info!("Responder settings reloaded from: {}", config_path);

        Ok(new_config)
    }
}
