//! CacheDNS Application Layer
//!
//! Ports the resolution engine depends on, and the engine itself.
pub mod ports;
pub mod use_cases;

pub use use_cases::ResolveQueryUseCase;
