#![allow(dead_code)]

use ferrous_synth_application::ports::QueryHandler;
use ferrous_synth_application::services::SettingsStore;
use ferrous_synth_application::use_cases::Responder;
use ferrous_synth_domain::{AddressPool, ResponderSettings};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::str::FromStr;
use std::sync::Arc;

pub fn settings(ipv4: &[&str], ipv6: &[&str]) -> ResponderSettings {
    ResponderSettings::new(AddressPool::parse(ipv4, ipv6).unwrap())
}

pub fn responder(settings: ResponderSettings) -> Arc<dyn QueryHandler> {
    Arc::new(Responder::new(SettingsStore::new(settings)))
}

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message
}
