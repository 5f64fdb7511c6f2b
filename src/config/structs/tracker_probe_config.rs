use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerProbeConfig {
    pub bind_address: String,
    /// Host clients are told to announce to, embedded in magnet links.
    pub external_host: String,
    /// Session dwell duration and token time-to-live, in seconds.
    pub probe_timeout: u64
}
