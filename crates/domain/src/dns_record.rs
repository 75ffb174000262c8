pub mod record;
pub mod record_type;

pub use record::{AddressRecord, AddressRecordKind, ResourceRecord, ServiceRecord};
pub use record_type::RecordType;
