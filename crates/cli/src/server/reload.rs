use ferrous_synth_application::use_cases::ReloadSettingsUseCase;
use std::sync::Arc;

/// Reload responder settings from the config file on every SIGHUP.
#[cfg(unix)]
pub fn spawn_reload_on_sighup(reload: Arc<ReloadSettingsUseCase>, config_path: Option<String>) {
    use ferrous_synth_domain::Config;
    use tokio::signal::unix::{signal, SignalKind};
    use tracing::{error, info, warn};

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(e) => {
                error!(error = %e, "Failed to install SIGHUP handler");
                return;
            }
        };

        while hangup.recv().await.is_some() {
            info!("SIGHUP received, reloading configuration");
            let Some(path) = config_path.clone().or_else(Config::get_config_path) else {
                warn!("No configuration file to reload");
                continue;
            };

            if let Err(e) = reload.execute(&path) {
                error!(error = %e, path = %path, "Reload failed, keeping previous settings");
            }
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_reload_on_sighup(_reload: Arc<ReloadSettingsUseCase>, _config_path: Option<String>) {}
