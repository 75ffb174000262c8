pub mod response_printer;
pub mod settings_store;

pub use response_printer::ResponsePrinter;
pub use settings_store::SettingsStore;
