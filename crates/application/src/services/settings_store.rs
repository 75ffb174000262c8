use arc_swap::ArcSwap;
use ferrous_synth_domain::ResponderSettings;
use std::sync::Arc;
use tracing::debug;

/// Copy-on-write holder for the live `ResponderSettings`.
///
/// Readers take a full snapshot per query; `publish` swaps the pointer
/// atomically, so a query in flight keeps the snapshot it started with.
#[derive(Clone)]
pub struct SettingsStore {
    current: Arc<ArcSwap<ResponderSettings>>,
}

impl SettingsStore {
    pub fn new(settings: ResponderSettings) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(settings)),
        }
    }

    pub fn snapshot(&self) -> Arc<ResponderSettings> {
        self.current.load_full()
    }

    pub fn publish(&self, settings: ResponderSettings) {
        debug!(
            addresses = settings.pool.len(),
            chain = ?settings.chain,
            "Publishing responder settings"
        );
        self.current.store(Arc::new(settings));
    }
}
