use cachedns_domain::{CacheEntry, DomainError, Question};

/// Port for the persisted cache snapshots.
///
/// Loading a missing or unreadable snapshot is not fatal: adapters
/// return an empty collection and immediately write a fresh empty
/// snapshot so the failure path is never silently repeated.
pub trait SnapshotStore: Send + Sync {
    fn load_answers(&self) -> Vec<CacheEntry>;
    fn load_questions(&self) -> Vec<Question>;

    fn save_answers(&self, entries: &[CacheEntry]) -> Result<(), DomainError>;
    fn save_questions(&self, questions: &[Question]) -> Result<(), DomainError>;
}
