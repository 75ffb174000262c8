use ferrous_synth_application::ports::QueryHandler;
use ferrous_synth_application::services::SettingsStore;
use ferrous_synth_application::use_cases::{ReloadSettingsUseCase, Responder};
use ferrous_synth_domain::{ChainMode, Config, ResponderSettings};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Services {
    pub handler: Arc<dyn QueryHandler>,
    pub reload: Arc<ReloadSettingsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = ResponderSettings::from_config(&config.responder)?;

        info!(
            addresses = settings.pool.len(),
            ttl = settings.ttl,
            mirror_answers = settings.mirror_answers,
            chain = ?settings.chain,
            "Initializing responder"
        );
        if settings.chain == ChainMode::Forward {
            warn!("Chain mode is 'forward' but no next handler is configured; queries will get SERVFAIL");
        }

        let store = SettingsStore::new(settings);
        let handler: Arc<dyn QueryHandler> = Arc::new(Responder::new(store.clone()));
        let reload = Arc::new(ReloadSettingsUseCase::new(store));

        Ok(Self { handler, reload })
    }
}
