//! Mapping from domain records to `hickory_proto` records.

use ferrous_synth_domain::{
    AddressRecordKind, DnsClass, DomainError, DomainName, ResourceRecord,
};
use hickory_proto::rr::rdata::{A, AAAA, SRV};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::str::FromStr;

pub struct RecordMapper;

impl RecordMapper {
    /// Convert a domain record into a wire-ready hickory record
    /// (owner name, type, class, TTL, RDATA).
    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let rdata = match record {
            ResourceRecord::Address(rr) => match rr.kind {
                AddressRecordKind::V4(ip) => RData::A(A(ip)),
                AddressRecordKind::V6(ip) => RData::AAAA(AAAA(ip)),
            },
            ResourceRecord::Service(rr) => RData::SRV(SRV::new(
                rr.priority,
                rr.weight,
                rr.port,
                Self::name_to_hickory(&rr.target)?,
            )),
        };

        let mut hickory =
            Record::from_rdata(Self::name_to_hickory(record.name())?, record.ttl(), rdata);
        hickory.set_dns_class(Self::class_to_hickory(record.class()));
        Ok(hickory)
    }

    pub fn all_to_hickory(records: &[ResourceRecord]) -> Result<Vec<Record>, DomainError> {
        records.iter().map(Self::to_hickory).collect()
    }

    pub fn name_to_hickory(name: &DomainName) -> Result<Name, DomainError> {
        Name::from_str(name.as_str()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }

    pub fn name_from_hickory(name: &Name) -> Result<DomainName, DomainError> {
        DomainName::parse(&name.to_ascii())
    }

    pub fn class_to_hickory(class: DnsClass) -> DNSClass {
        DNSClass::from(class.0)
    }

    pub fn class_from_hickory(class: DNSClass) -> DnsClass {
        DnsClass(u16::from(class))
    }
}
