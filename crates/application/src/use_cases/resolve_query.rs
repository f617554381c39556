use std::sync::Arc;

use cachedns_domain::dns_message::wire;
use cachedns_domain::{Message, Question, RCode, Record};
use tracing::{debug, info, warn};

use crate::ports::{CacheStore, SnapshotStore, UpstreamGateway};

/// The resolution engine: answers one decoded query from the positive
/// cache, the negative cache, or the upstream resolver, in that order,
/// and falls back to a synthesized refusal.
pub struct ResolveQueryUseCase {
    cache: Arc<dyn CacheStore>,
    upstream: Arc<dyn UpstreamGateway>,
    snapshots: Arc<dyn SnapshotStore>,
    forwarding_enabled: bool,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        upstream: Arc<dyn UpstreamGateway>,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            cache,
            upstream,
            snapshots,
            forwarding_enabled: true,
        }
    }

    /// Offline mode: never contact upstream, serve from cache only.
    pub fn with_forwarding_enabled(mut self, enabled: bool) -> Self {
        self.forwarding_enabled = enabled;
        self
    }

    /// Loads both cache collections from their snapshots.
    pub fn hydrate(&self) {
        let entries = self.snapshots.load_answers();
        let questions = self.snapshots.load_questions();
        info!(
            answers = entries.len(),
            questions = questions.len(),
            "Cache loaded"
        );
        self.cache.load(entries, questions);
    }

    /// Writes both cache collections to their snapshots.
    pub fn flush(&self) {
        if let Err(e) = self.snapshots.save_answers(&self.cache.answers_snapshot()) {
            warn!(error = %e, "Failed to persist answer cache");
        }
        if let Err(e) = self.snapshots.save_questions(&self.cache.questions_snapshot()) {
            warn!(error = %e, "Failed to persist question cache");
        }
    }

    /// Resolves one query. A structurally valid query always gets an
    /// answer; the worst case is a synthesized refusal.
    ///
    /// `raw_query` is the original datagram; upstream forwarding sends
    /// those exact bytes rather than a re-encoding.
    pub async fn execute(&self, query: &Message, raw_query: &[u8]) -> Message {
        for question in &query.questions {
            debug!(
                name = %question.name,
                query_type = question.query_type.code(),
                query_class = question.query_class.code(),
                "Question received"
            );
        }

        // The asked-verdict is taken before the questions are recorded,
        // otherwise recording would make every first-time query look
        // negatively cached.
        let all_previously_asked = query
            .questions
            .iter()
            .all(|question| self.cache.has_been_asked(question));

        // Record-then-resolve: every incoming question grows the asked
        // set, cache hit or not.
        for question in &query.questions {
            self.cache.record_question(question.clone());
        }
        self.flush();

        if let Some(answers) = self.answers_from_cache(&query.questions) {
            info!(id = query.id, answers = answers.len(), "Answered from cache");
            return Message::response(query, RCode::NoError, answers);
        }

        if all_previously_asked {
            info!(id = query.id, "Known unanswerable question, refusing");
            return Message::refused(query);
        }

        if self.forwarding_enabled {
            if let Some(response) = self.answer_from_upstream(query, raw_query).await {
                return response;
            }
        }

        info!(id = query.id, "No answer from any path, refusing");
        Message::refused(query)
    }

    /// All stored answers for the query's questions, in per-question
    /// match order, or `None` unless every question has at least one.
    /// Vacuously a hit for a query with no questions, which therefore
    /// gets an empty NoError answer.
    fn answers_from_cache(&self, questions: &[Question]) -> Option<Vec<Record>> {
        let mut answers = Vec::new();
        for question in questions {
            answers.extend(self.cache.find_answers(question)?);
        }
        Some(answers)
    }

    async fn answer_from_upstream(&self, query: &Message, raw_query: &[u8]) -> Option<Message> {
        let raw_response = match self.upstream.forward(raw_query).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(id = query.id, error = %e, "Upstream forward failed");
                return None;
            }
        };

        let response = match wire::decode(&raw_response) {
            Ok(message) => message,
            Err(e) => {
                warn!(id = query.id, error = %e, "Undecodable upstream response");
                return None;
            }
        };

        let records = response
            .answers
            .iter()
            .chain(response.authorities.iter())
            .chain(response.additionals.iter());
        for record in records {
            debug!(
                name = %record.name,
                query_type = record.query_type.code(),
                ttl = record.ttl,
                "Saved to cache"
            );
            self.cache.record_answer(record.clone());
        }
        // The original questions are remembered too, so an empty or
        // refused upstream answer still counts as "asked".
        for question in &query.questions {
            self.cache.record_question(question.clone());
        }
        self.flush();

        info!(
            id = query.id,
            answers = response.answers.len(),
            rcode = response.r_code.code(),
            "Answered from upstream"
        );
        Some(response)
    }
}
