use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DnsProbeConfig {
    pub bind_address: String,
    /// Parent zone the listener answers for, without a trailing dot.
    pub top_domain: String,
    /// Session dwell duration and token time-to-live, in seconds.
    pub probe_timeout: u64
}
