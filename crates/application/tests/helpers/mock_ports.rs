#![allow(dead_code)]

use async_trait::async_trait;
use cachedns_application::ports::{CacheStore, SnapshotStore, UpstreamGateway};
use cachedns_domain::{CacheEntry, DomainError, Question, Record};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockCacheStore {
    answers: Mutex<Vec<CacheEntry>>,
    questions: Mutex<Vec<Question>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl CacheStore for MockCacheStore {
    fn find_answers(&self, question: &Question) -> Option<Vec<Record>> {
        let matches: Vec<Record> = self
            .answers
            .lock()
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
        self.questions.lock().unwrap().iter().any(|q| q == question)
    }

    fn record_answer(&self, record: Record) {
        self.answers.lock().unwrap().push(CacheEntry::new(record));
    }

    fn record_question(&self, question: Question) {
        self.questions.lock().unwrap().push(question);
    }

    fn answers_snapshot(&self) -> Vec<CacheEntry> {
        self.answers.lock().unwrap().clone()
    }

    fn questions_snapshot(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    fn load(&self, entries: Vec<CacheEntry>, questions: Vec<Question>) {
        *self.answers.lock().unwrap() = entries;
        *self.questions.lock().unwrap() = questions;
    }
}

pub struct MockUpstreamGateway {
    response: Mutex<Option<Result<Vec<u8>, DomainError>>>,
    calls: AtomicUsize,
}

impl MockUpstreamGateway {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(Some(Err(DomainError::UpstreamTimeout))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(raw: Vec<u8>) -> Self {
        let gateway = Self::new();
        gateway.set_response(Ok(raw));
        gateway
    }

    pub fn set_response(&self, response: Result<Vec<u8>, DomainError>) {
        *self.response.lock().unwrap() = Some(response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockUpstreamGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamGateway for MockUpstreamGateway {
    async fn forward(&self, _raw_query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(DomainError::UpstreamTimeout))
    }
}

#[derive(Default)]
pub struct MockSnapshotStore {
    pub saved_answers: Mutex<Vec<Vec<CacheEntry>>>,
    pub saved_questions: Mutex<Vec<Vec<Question>>>,
    pub preloaded_answers: Mutex<Vec<CacheEntry>>,
    pub preloaded_questions: Mutex<Vec<Question>>,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_save_count(&self) -> usize {
        self.saved_answers.lock().unwrap().len()
    }

    pub fn last_saved_questions(&self) -> Vec<Question> {
        self.saved_questions
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn load_answers(&self) -> Vec<CacheEntry> {
        self.preloaded_answers.lock().unwrap().clone()
    }

    fn load_questions(&self) -> Vec<Question> {
        self.preloaded_questions.lock().unwrap().clone()
    }

    fn save_answers(&self, entries: &[CacheEntry]) -> Result<(), DomainError> {
        self.saved_answers.lock().unwrap().push(entries.to_vec());
        Ok(())
    }

    fn save_questions(&self, questions: &[Question]) -> Result<(), DomainError> {
        self.saved_questions.lock().unwrap().push(questions.to_vec());
        Ok(())
    }
}
