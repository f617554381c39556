use cachedns_domain::{CacheEntry, Question, Record};

/// Port for the two append-only cache collections.
///
/// Implementations use interior mutability; the engine is the only
/// writer and calls are strictly sequential.
pub trait CacheStore: Send + Sync {
    /// Every stored record answering `question`, in insertion order.
    /// `None` means the question has never been answered; callers
    /// must be able to tell that apart from an empty match list.
    fn find_answers(&self, question: &Question) -> Option<Vec<Record>>;

    /// Whether an equal question was recorded before.
    fn has_been_asked(&self, question: &Question) -> bool;

    /// Append-only insert. Duplicates are permitted and coexist.
    fn record_answer(&self, record: Record);

    /// Append-only insert into the asked-question set.
    fn record_question(&self, question: Question);

    /// Copies of the collections, for persistence.
    fn answers_snapshot(&self) -> Vec<CacheEntry>;
    fn questions_snapshot(&self) -> Vec<Question>;

    /// Replaces both collections wholesale. Used once, at startup.
    fn load(&self, entries: Vec<CacheEntry>, questions: Vec<Question>);
}
