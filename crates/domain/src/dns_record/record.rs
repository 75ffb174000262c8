use super::RecordType;
use crate::dns_name::DomainName;
use crate::dns_query::{AddressFamily, DnsClass};
use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address payload; the variant is the record type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressRecordKind {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl AddressRecordKind {
    pub fn record_type(&self) -> RecordType {
        match self {
            AddressRecordKind::V4(_) => RecordType::A,
            AddressRecordKind::V6(_) => RecordType::AAAA,
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            AddressRecordKind::V4(_) => AddressFamily::Ipv4,
            AddressRecordKind::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn ip(&self) -> IpAddr {
        match self {
            AddressRecordKind::V4(ip) => IpAddr::V4(*ip),
            AddressRecordKind::V6(ip) => IpAddr::V6(*ip),
        }
    }
}

impl From<IpAddr> for AddressRecordKind {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => AddressRecordKind::V4(v4),
            IpAddr::V6(v6) => AddressRecordKind::V6(v6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub name: DomainName,
    pub class: DnsClass,
    pub ttl: u32,
    pub kind: AddressRecordKind,
}

impl AddressRecord {
    pub fn new(name: DomainName, class: DnsClass, ttl: u32, kind: AddressRecordKind) -> Self {
        Self {
            name,
            class,
            ttl,
            kind,
        }
    }

    /// Builds an address record under an explicit type tag.
    ///
    /// Fails with `InvalidAddress` when `ip` does not belong to the family the
    /// tag requires (A needs IPv4, AAAA needs IPv6).
    pub fn typed(
        name: DomainName,
        class: DnsClass,
        ttl: u32,
        record_type: RecordType,
        ip: IpAddr,
    ) -> Result<Self, DomainError> {
        let kind = match (record_type, ip) {
            (RecordType::A, IpAddr::V4(v4)) => AddressRecordKind::V4(v4),
            (RecordType::AAAA, IpAddr::V6(v6)) => AddressRecordKind::V6(v6),
            (record_type, ip) => {
                return Err(DomainError::InvalidAddress(format!(
                    "{} is not valid for a {} record",
                    ip, record_type
                )))
            }
        };
        Ok(Self::new(name, class, ttl, kind))
    }

    pub fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: DomainName,
    pub class: DnsClass,
    pub ttl: u32,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: DomainName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    Address(AddressRecord),
    Service(ServiceRecord),
}

impl ResourceRecord {
    pub fn name(&self) -> &DomainName {
        match self {
            ResourceRecord::Address(rr) => &rr.name,
            ResourceRecord::Service(rr) => &rr.name,
        }
    }

    pub fn class(&self) -> DnsClass {
        match self {
            ResourceRecord::Address(rr) => rr.class,
            ResourceRecord::Service(rr) => rr.class,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            ResourceRecord::Address(rr) => rr.ttl,
            ResourceRecord::Service(rr) => rr.ttl,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ResourceRecord::Address(rr) => rr.record_type(),
            ResourceRecord::Service(_) => RecordType::SRV,
        }
    }

    pub fn as_address(&self) -> Option<&AddressRecord> {
        match self {
            ResourceRecord::Address(rr) => Some(rr),
            ResourceRecord::Service(_) => None,
        }
    }

    pub fn as_service(&self) -> Option<&ServiceRecord> {
        match self {
            ResourceRecord::Service(rr) => Some(rr),
            ResourceRecord::Address(_) => None,
        }
    }
}

impl From<AddressRecord> for ResourceRecord {
    fn from(rr: AddressRecord) -> Self {
        ResourceRecord::Address(rr)
    }
}

impl From<ServiceRecord> for ResourceRecord {
    fn from(rr: ServiceRecord) -> Self {
        ResourceRecord::Service(rr)
    }
}
