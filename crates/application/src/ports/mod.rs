mod query_handler;
mod response_sink;

pub use query_handler::QueryHandler;
pub use response_sink::ResponseSink;

// Re-export for convenience
pub use ferrous_synth_domain::{Query, Response};
