use super::ResponseSink;
use async_trait::async_trait;
use ferrous_synth_domain::{DomainError, Query};

#[async_trait]
pub trait QueryHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Handle one query, writing the reply through `sink`.
    ///
    /// On `Err`, nothing has been written; the caller decides which protocol
    /// failure to send back.
    async fn handle(&self, query: &Query, sink: &mut dyn ResponseSink) -> Result<(), DomainError>;
}
