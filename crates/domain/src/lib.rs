//! CacheDNS Domain Layer
pub mod cache_entry;
pub mod config;
pub mod dns_message;
pub mod errors;

pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, Config};
pub use dns_message::{Message, OpCode, Question, QueryClass, QueryType, RCode, Record};
pub use errors::DomainError;
