use std::sync::RwLock;

use cachedns_application::ports::CacheStore;
use cachedns_domain::{CacheEntry, Question, Record};

/// Append-only in-memory cache: stored answers stamped with their
/// expiry, plus the set of previously asked questions.
///
/// Lookups are linear exact-match scans. Entries are never evicted;
/// the due-time stamp exists in the snapshot but is not consulted.
#[derive(Default)]
pub struct InMemoryCacheStore {
    answers: RwLock<Vec<CacheEntry>>,
    questions: RwLock<Vec<Question>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.read().unwrap().len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.read().unwrap().len()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn find_answers(&self, question: &Question) -> Option<Vec<Record>> {
        let matches: Vec<Record> = self
            .answers
            .read()
            .unwrap()
            .iter()
            .filter(|entry| question.matches(&entry.record))
            .map(|entry| entry.record.clone())
            .collect();
        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    fn has_been_asked(&self, question: &Question) -> bool {
        self.questions
            .read()
            .unwrap()
            .iter()
            .any(|asked| asked == question)
    }

    fn record_answer(&self, record: Record) {
        self.answers.write().unwrap().push(CacheEntry::new(record));
    }

    fn record_question(&self, question: Question) {
        self.questions.write().unwrap().push(question);
    }

    fn answers_snapshot(&self) -> Vec<CacheEntry> {
        self.answers.read().unwrap().clone()
    }

    fn questions_snapshot(&self) -> Vec<Question> {
        self.questions.read().unwrap().clone()
    }

    fn load(&self, entries: Vec<CacheEntry>, questions: Vec<Question>) {
        *self.answers.write().unwrap() = entries;
        *self.questions.write().unwrap() = questions;
    }
}
