use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// The single fixed resolver unresolved queries are forwarded to.
    #[serde(default = "default_address")]
    pub address: String,

    /// Receive timeout for one upstream round-trip, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// When false the proxy runs offline: cache only, no forwarding.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_ms: default_timeout_ms(),
            enabled: default_enabled(),
        }
    }
}

fn default_address() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_enabled() -> bool {
    true
}
