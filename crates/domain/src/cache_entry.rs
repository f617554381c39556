use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::dns_message::Record;

/// A cached answer record stamped with its absolute expiry time.
///
/// `due_time` is computed exactly once, at insertion, and is never
/// recomputed. Nothing currently consults it to expire entries, so cached
/// answers are logically permanent once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub record: Record,
    pub due_time: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(record: Record) -> Self {
        let ttl_secs = i64::from(record.ttl.max(0));
        Self {
            due_time: Utc::now() + Duration::seconds(ttl_secs),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_message::{QueryClass, QueryType};

    #[test]
    fn test_due_time_is_ttl_seconds_ahead() {
        let record = Record::new("example.com", QueryType::A, QueryClass::Internet, 300, vec![]);
        let before = Utc::now();
        let entry = CacheEntry::new(record);
        let offset = entry.due_time - before;
        assert!(offset >= Duration::seconds(299));
        assert!(offset <= Duration::seconds(301));
    }

    #[test]
    fn test_negative_ttl_is_clamped() {
        let record = Record::new("example.com", QueryType::A, QueryClass::Internet, -1, vec![]);
        let entry = CacheEntry::new(record);
        assert!(entry.due_time <= Utc::now() + Duration::seconds(1));
    }
}
