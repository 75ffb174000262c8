//! Ferrous Synth Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod settings;

pub use config::{ChainMode, CliOverrides, Config, ConfigError, ResponderConfig};
pub use dns_name::DomainName;
pub use dns_query::{AddressFamily, DnsClass, Query, TransportProtocol};
pub use dns_record::{AddressRecord, AddressRecordKind, RecordType, ResourceRecord, ServiceRecord};
pub use dns_response::{AnswerSet, Response};
pub use errors::DomainError;
pub use settings::{AddressPool, ResponderSettings};
