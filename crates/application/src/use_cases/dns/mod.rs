pub mod responder;

pub use responder::{synthesize_response, Responder};
