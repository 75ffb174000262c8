use crate::dns_name::DomainName;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// IP family of the transport a query arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// IPv4-mapped IPv6 sources (dual-stack sockets) count as IPv4.
    pub fn of(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "udp",
            TransportProtocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query class, carried through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnsClass(pub u16);

impl DnsClass {
    pub const IN: DnsClass = DnsClass(1);
    pub const CH: DnsClass = DnsClass(3);
    pub const HS: DnsClass = DnsClass(4);
}

impl Default for DnsClass {
    fn default() -> Self {
        DnsClass::IN
    }
}

/// Read-only view of an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: DomainName,
    pub class: DnsClass,
    pub query_type: u16,
    pub family: Option<AddressFamily>,
    pub protocol: TransportProtocol,
    pub source_port: u16,
}

impl Query {
    pub fn new(
        name: DomainName,
        class: DnsClass,
        query_type: u16,
        family: Option<AddressFamily>,
        protocol: TransportProtocol,
        source_port: u16,
    ) -> Self {
        Self {
            name,
            class,
            query_type,
            family,
            protocol,
            source_port,
        }
    }

    pub fn from_source(
        name: DomainName,
        class: DnsClass,
        query_type: u16,
        protocol: TransportProtocol,
        source: SocketAddr,
    ) -> Self {
        Self::new(
            name,
            class,
            query_type,
            Some(AddressFamily::of(source.ip())),
            protocol,
            source.port(),
        )
    }
}
