use async_trait::async_trait;
use ferrous_synth_domain::{DomainError, Response};

/// Output channel bound to the client that sent one query.
#[async_trait]
pub trait ResponseSink: Send {
    /// Encode and transmit `response`. Transport failures map to
    /// `DomainError::WriteFailed`; no retry happens here.
    async fn write(&mut self, response: &Response) -> Result<(), DomainError>;
}
