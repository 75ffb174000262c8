pub mod errors;
pub mod logging;
pub mod responder;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use responder::{ChainMode, ResponderConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
