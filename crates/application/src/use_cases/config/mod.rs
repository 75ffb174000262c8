pub mod reload;

pub use reload::ReloadSettingsUseCase;
