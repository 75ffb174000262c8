use super::query_map::QueryMapper;
use super::response_sink::HickoryResponseSink;
use ferrous_synth_application::ports::QueryHandler;
use ferrous_synth_domain::DomainError;
use hickory_proto::op::{Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Adapts a `QueryHandler` to hickory-server's `RequestHandler`.
#[derive(Clone)]
pub struct SynthRequestHandler {
    handler: Arc<dyn QueryHandler>,
}

impl SynthRequestHandler {
    pub fn new(handler: Arc<dyn QueryHandler>) -> Self {
        Self { handler }
    }

    /// Protocol failure sent back when the handler returns without writing.
    pub fn response_code_for(error: &DomainError) -> ResponseCode {
        match error {
            DomainError::UnsupportedFamily(_) => ResponseCode::Refused,
            DomainError::InvalidDomainName(_) => ResponseCode::FormErr,
            _ => ResponseCode::ServFail,
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for SynthRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let lower_query = request_info.query;
        let query = match QueryMapper::to_query(
            lower_query.original().name(),
            lower_query.query_class(),
            lower_query.query_type(),
            request_info.src,
            request_info.protocol,
        ) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Rejecting malformed query");
                return send_error_response(request, response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        info!(
            domain = %query.name,
            record_type = ?lower_query.query_type(),
            client = %request_info.src,
            protocol = %query.protocol,
            handler = self.handler.name(),
            "DNS query received"
        );

        let mut sink = HickoryResponseSink::new(request, response_handle.clone());
        match self.handler.handle(&query, &mut sink).await {
            Ok(()) => sink
                .into_info()
                .unwrap_or_else(|| ResponseInfo::from(*request.header())),
            Err(DomainError::WriteFailed(e)) => {
                error!(error = %e, domain = %query.name, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
            Err(e) => {
                let code = Self::response_code_for(&e);
                warn!(error = %e, domain = %query.name, code = ?code, "Query not answered");
                send_error_response(request, response_handle, code).await
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    mut response_handle: R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
