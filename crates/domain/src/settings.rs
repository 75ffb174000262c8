use crate::config::{ChainMode, ResponderConfig};
use crate::dns_query::AddressFamily;
use crate::dns_record::AddressRecordKind;
use crate::errors::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Addresses handed out by the responder, split by family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPool {
    ipv4: Vec<Ipv4Addr>,
    ipv6: Vec<Ipv6Addr>,
}

impl AddressPool {
    /// Parses each list for its declared family. An IPv6 literal in the IPv4
    /// list (or the reverse) is an `InvalidAddress`.
    pub fn parse<S: AsRef<str>>(ipv4: &[S], ipv6: &[S]) -> Result<Self, DomainError> {
        let ipv4 = ipv4
            .iter()
            .map(|s| {
                s.as_ref().trim().parse::<Ipv4Addr>().map_err(|_| {
                    DomainError::InvalidAddress(format!("'{}' is not an IPv4 address", s.as_ref()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ipv6 = ipv6
            .iter()
            .map(|s| {
                s.as_ref().trim().parse::<Ipv6Addr>().map_err(|_| {
                    DomainError::InvalidAddress(format!("'{}' is not an IPv6 address", s.as_ref()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ipv4, ipv6 })
    }

    /// Pool entries matching `family`, in configuration order.
    pub fn addresses_for(&self, family: AddressFamily) -> Vec<AddressRecordKind> {
        match family {
            AddressFamily::Ipv4 => self.ipv4.iter().copied().map(AddressRecordKind::V4).collect(),
            AddressFamily::Ipv6 => self.ipv6.iter().copied().map(AddressRecordKind::V6).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}

/// Immutable snapshot the responder reads per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderSettings {
    pub pool: AddressPool,
    pub ttl: u32,
    pub srv_priority: u16,
    pub srv_weight: u16,
    pub mirror_answers: bool,
    pub chain: ChainMode,
}

impl ResponderSettings {
    pub fn new(pool: AddressPool) -> Self {
        Self {
            pool,
            ttl: 0,
            srv_priority: 0,
            srv_weight: 0,
            mirror_answers: true,
            chain: ChainMode::Terminate,
        }
    }

    pub fn from_config(config: &ResponderConfig) -> Result<Self, DomainError> {
        let pool = AddressPool::parse(&config.ipv4_addresses, &config.ipv6_addresses)?;
        Ok(Self {
            pool,
            ttl: config.ttl,
            srv_priority: config.srv_priority,
            srv_weight: config.srv_weight,
            mirror_answers: config.mirror_answers,
            chain: config.chain,
        })
    }

    pub fn with_mirror_answers(mut self, mirror: bool) -> Self {
        self.mirror_answers = mirror;
        self
    }

    pub fn with_chain(mut self, chain: ChainMode) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}
