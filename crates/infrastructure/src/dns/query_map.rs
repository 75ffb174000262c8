use super::record_map::RecordMapper;
use ferrous_synth_domain::{DomainError, Query, TransportProtocol};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::xfer::Protocol;
use std::net::SocketAddr;

/// Builds domain `Query` values from what hickory hands the server.
pub struct QueryMapper;

impl QueryMapper {
    pub fn to_query(
        name: &Name,
        class: DNSClass,
        query_type: RecordType,
        src: SocketAddr,
        protocol: Protocol,
    ) -> Result<Query, DomainError> {
        Ok(Query::from_source(
            RecordMapper::name_from_hickory(name)?,
            RecordMapper::class_from_hickory(class),
            u16::from(query_type),
            Self::protocol_from_hickory(protocol),
            src,
        ))
    }

    /// Anything that is not plain UDP rides on a stream and reports as `tcp`.
    pub fn protocol_from_hickory(protocol: Protocol) -> TransportProtocol {
        match protocol {
            Protocol::Udp => TransportProtocol::Udp,
            _ => TransportProtocol::Tcp,
        }
    }
}
