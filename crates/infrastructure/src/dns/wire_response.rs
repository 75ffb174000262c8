//! Standalone wire encoding of a synthesized reply.
//!
//! The server path goes through `MessageResponseBuilder`; this renders the
//! same reply into a `Message` and bytes without a live response handle.

use super::record_map::RecordMapper;
use ferrous_synth_domain::{DomainError, Response};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

/// Build the reply message for `request`: id, opcode, RD and the question are
/// copied from the request; QR and AA are set from `response`.
pub fn build_response_message(
    request: &Message,
    response: &Response,
) -> Result<Message, DomainError> {
    let mut message = Message::new();
    message
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_authoritative(response.authoritative)
        .set_response_code(ResponseCode::NoError);

    message.add_queries(request.queries().iter().cloned());
    message.add_answers(RecordMapper::all_to_hickory(&response.answers)?);
    message.add_additionals(RecordMapper::all_to_hickory(&response.additionals)?);

    Ok(message)
}

/// Serialize the reply for `request` to wire format bytes
pub fn encode_response(request: &Message, response: &Response) -> Result<Vec<u8>, DomainError> {
    let message = build_response_message(request, response)?;
    serialize_message(&message)
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::WriteFailed(format!("Failed to serialize DNS message: {}", e)))?;

    Ok(buf)
}
