pub mod query_map;
pub mod record_map;
pub mod response_sink;
pub mod server;
pub mod wire_response;

pub use query_map::QueryMapper;
pub use record_map::RecordMapper;
pub use response_sink::HickoryResponseSink;
pub use server::SynthRequestHandler;
