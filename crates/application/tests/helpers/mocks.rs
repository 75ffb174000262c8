use async_trait::async_trait;
use ferrous_synth_application::ports::{QueryHandler, ResponseSink};
use ferrous_synth_domain::{DomainError, Query, Response};

#[derive(Default)]
pub struct RecordingSink {
    pub written: Vec<Response>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(&self) -> &Response {
        assert_eq!(self.written.len(), 1, "expected exactly one response");
        &self.written[0]
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn write(&mut self, response: &Response) -> Result<(), DomainError> {
        self.written.push(response.clone());
        Ok(())
    }
}

pub struct FailingSink {
    pub attempts: usize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self { attempts: 0 }
    }
}

#[async_trait]
impl ResponseSink for FailingSink {
    async fn write(&mut self, _response: &Response) -> Result<(), DomainError> {
        self.attempts += 1;
        Err(DomainError::WriteFailed("connection reset".to_string()))
    }
}

/// Next handler that always writes the same canned response.
pub struct StaticHandler {
    response: Response,
}

impl StaticHandler {
    pub fn new(response: Response) -> Self {
        Self { response }
    }
}

#[async_trait]
impl QueryHandler for StaticHandler {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn handle(&self, _query: &Query, sink: &mut dyn ResponseSink) -> Result<(), DomainError> {
        sink.write(&self.response).await
    }
}
