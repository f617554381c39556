use serde::{Deserialize, Serialize};

use super::codes::{QueryClass, QueryType};
use super::record::Record;

/// A name/type/class triple a client wants resolved.
///
/// Equality is exact on all three fields (case-sensitive, no wildcard
/// semantics); it is what cache lookups key on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub query_type: QueryType,
    pub query_class: QueryClass,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: QueryType, query_class: QueryClass) -> Self {
        Self {
            name: name.into(),
            query_type,
            query_class,
        }
    }

    /// Whether a stored record answers this question.
    pub fn matches(&self, record: &Record) -> bool {
        self.name == record.name
            && self.query_type.code() == record.query_type.code()
            && self.query_class.code() == record.query_class.code()
    }
}
