use serde::{Deserialize, Serialize};

use super::codes::{QueryClass, QueryType};

/// A resource record: one piece of answer data.
///
/// `data` is the raw RDATA payload and is never interpreted further;
/// its wire length is derived from the vector, not stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub query_type: QueryType,
    pub query_class: QueryClass,
    pub ttl: i32,
    pub data: Vec<u8>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        query_type: QueryType,
        query_class: QueryClass,
        ttl: i32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            query_type,
            query_class,
            ttl,
            data,
        }
    }
}
