use super::record_map::RecordMapper;
use async_trait::async_trait;
use ferrous_synth_application::ports::ResponseSink;
use ferrous_synth_domain::{DomainError, Response};
use hickory_proto::op::Header;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use tracing::debug;

/// Sink bound to one hickory request: encodes records with hickory-proto and
/// sends them through the request's response handle.
pub struct HickoryResponseSink<'r, R: ResponseHandler> {
    request: &'r Request,
    response_handle: R,
    info: Option<ResponseInfo>,
}

impl<'r, R: ResponseHandler> HickoryResponseSink<'r, R> {
    pub fn new(request: &'r Request, response_handle: R) -> Self {
        Self {
            request,
            response_handle,
            info: None,
        }
    }

    /// `ResponseInfo` of the last successful write, if any.
    pub fn into_info(self) -> Option<ResponseInfo> {
        self.info
    }
}

#[async_trait]
impl<'r, R: ResponseHandler> ResponseSink for HickoryResponseSink<'r, R> {
    async fn write(&mut self, response: &Response) -> Result<(), DomainError> {
        // All records are encoded before anything is sent.
        let answers = RecordMapper::all_to_hickory(&response.answers)?;
        let additionals = RecordMapper::all_to_hickory(&response.additionals)?;

        let mut header = Header::response_from_request(self.request.header());
        header.set_authoritative(response.authoritative);

        let builder = MessageResponseBuilder::from_message_request(self.request);
        let message = builder.build(header, answers.iter(), &[], &[], additionals.iter());

        let info = self
            .response_handle
            .send_response(message)
            .await
            .map_err(|e| DomainError::WriteFailed(e.to_string()))?;

        debug!(
            answers = answers.len(),
            additionals = additionals.len(),
            "Response sent"
        );

        self.info = Some(info);
        Ok(())
    }
}
