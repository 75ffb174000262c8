use crate::dns_record::ResourceRecord;

/// Ordered records answering one query.
pub type AnswerSet = Vec<ResourceRecord>;

/// A fully assembled reply, ready for the sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub authoritative: bool,
    pub answers: AnswerSet,
    pub additionals: Vec<ResourceRecord>,
}

impl Response {
    pub fn authoritative(answers: AnswerSet, additionals: Vec<ResourceRecord>) -> Self {
        Self {
            authoritative: true,
            answers,
            additionals,
        }
    }

    pub fn service_records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.additionals
            .iter()
            .filter(|rr| rr.as_service().is_some())
    }
}
