use crate::ports::{QueryHandler, ResponseSink};
use crate::services::{ResponsePrinter, SettingsStore};
use async_trait::async_trait;
use ferrous_synth_domain::{
    AddressRecord, AnswerSet, ChainMode, DomainError, DomainName, Query, ResourceRecord,
    ResponderSettings, Response, ServiceRecord,
};
use std::sync::Arc;
use tracing::debug;

const PLUGIN_NAME: &str = "synth";

/// Answers every query with records synthesized from the configured pool.
///
/// In `ChainMode::Forward` it instead hands the query to `next`, wrapping the
/// sink in a [`ResponsePrinter`].
pub struct Responder {
    settings: SettingsStore,
    next: Option<Arc<dyn QueryHandler>>,
}

impl Responder {
    pub fn new(settings: SettingsStore) -> Self {
        Self {
            settings,
            next: None,
        }
    }

    pub fn with_next(mut self, next: Arc<dyn QueryHandler>) -> Self {
        self.next = Some(next);
        self
    }
}

#[async_trait]
impl QueryHandler for Responder {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn handle(&self, query: &Query, sink: &mut dyn ResponseSink) -> Result<(), DomainError> {
        let settings = self.settings.snapshot();

        debug!(
            name = %query.name,
            family = ?query.family,
            protocol = %query.protocol,
            port = query.source_port,
            "Received query"
        );

        if settings.chain == ChainMode::Forward {
            let next = self.next.as_ref().ok_or(DomainError::NoNextHandler)?;
            debug!(next = next.name(), "Forwarding query");
            let mut printer = ResponsePrinter::new(sink, PLUGIN_NAME);
            return next.handle(query, &mut printer).await;
        }

        let response = synthesize_response(query, &settings)?;

        debug!(
            name = %query.name,
            answers = response.answers.len(),
            "Sending synthesized response"
        );

        sink.write(&response).await
    }
}

/// Builds the full reply for `query`. Pure: identical inputs give identical
/// output.
pub fn synthesize_response(
    query: &Query,
    settings: &ResponderSettings,
) -> Result<Response, DomainError> {
    let family = query.family.ok_or_else(|| {
        DomainError::UnsupportedFamily("transport is neither IPv4 nor IPv6".to_string())
    })?;

    let answers: AnswerSet = settings
        .pool
        .addresses_for(family)
        .into_iter()
        .map(|kind| {
            ResourceRecord::Address(AddressRecord::new(
                query.name.clone(),
                query.class,
                settings.ttl,
                kind,
            ))
        })
        .collect();

    if answers.is_empty() {
        return Err(DomainError::UnsupportedFamily(format!(
            "no {} addresses configured",
            family
        )));
    }

    let srv = ServiceRecord {
        name: query
            .name
            .with_prefix_label(&format!("_{}", query.protocol))
            .map_err(|e| DomainError::ServiceNameTooLong(e.to_string()))?,
        class: query.class,
        ttl: settings.ttl,
        priority: settings.srv_priority,
        weight: settings.srv_weight,
        port: query.source_port,
        target: DomainName::root(),
    };

    let mut additionals = if settings.mirror_answers {
        let mut mirrored = Vec::with_capacity(answers.len() + 1);
        mirrored.extend(answers.iter().cloned());
        mirrored
    } else {
        Vec::with_capacity(1)
    };
    additionals.push(ResourceRecord::Service(srv));

    Ok(Response::authoritative(answers, additionals))
}
