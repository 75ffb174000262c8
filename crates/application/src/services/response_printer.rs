use crate::ports::ResponseSink;
use async_trait::async_trait;
use ferrous_synth_domain::{DomainError, Response};
use tracing::info;

/// Sink wrapper that logs every reply passing through before delegating.
pub struct ResponsePrinter<'a> {
    inner: &'a mut dyn ResponseSink,
    plugin: &'static str,
}

impl<'a> ResponsePrinter<'a> {
    pub fn new(inner: &'a mut dyn ResponseSink, plugin: &'static str) -> Self {
        Self { inner, plugin }
    }
}

#[async_trait]
impl<'a> ResponseSink for ResponsePrinter<'a> {
    async fn write(&mut self, response: &Response) -> Result<(), DomainError> {
        info!(
            plugin = self.plugin,
            answers = response.answers.len(),
            additionals = response.additionals.len(),
            "Response written"
        );
        self.inner.write(response).await
    }
}
