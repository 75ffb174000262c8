use ferrous_synth_domain::{AddressFamily, DnsClass, DomainName, Query, TransportProtocol};

pub struct QueryBuilder {
    name: DomainName,
    class: DnsClass,
    query_type: u16,
    family: Option<AddressFamily>,
    protocol: TransportProtocol,
    source_port: u16,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            name: DomainName::parse("foo.example.org.").unwrap(),
            class: DnsClass::IN,
            query_type: 1,
            family: Some(AddressFamily::Ipv4),
            protocol: TransportProtocol::Udp,
            source_port: 40212,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = DomainName::parse(name).unwrap();
        self
    }

    pub fn class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }

    pub fn family(mut self, family: Option<AddressFamily>) -> Self {
        self.family = family;
        self
    }

    pub fn ipv6(self) -> Self {
        self.family(Some(AddressFamily::Ipv6))
    }

    pub fn protocol(mut self, protocol: TransportProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn source_port(mut self, port: u16) -> Self {
        self.source_port = port;
        self
    }

    pub fn build(self) -> Query {
        Query::new(
            self.name,
            self.class,
            self.query_type,
            self.family,
            self.protocol,
            self.source_port,
        )
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
