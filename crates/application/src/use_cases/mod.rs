pub mod config;
pub mod dns;

// Re-export use cases
pub use config::ReloadSettingsUseCase;
pub use dns::{synthesize_response, Responder};
