use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of the service counters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Stats {
    pub started: i64,
    pub udp4_connections_handled: i64,
    pub udp6_connections_handled: i64,
    pub udp4_announces_handled: i64,
    pub udp6_announces_handled: i64,
    pub udp4_bad_request: i64,
    pub udp6_bad_request: i64,
    pub dns_queries_handled: i64,
    pub dns_bad_request: i64,
    pub dns_tokens_matched: i64,
    pub tracker_tokens_matched: i64,
    pub sessions_opened: i64,
    pub sessions_closed: i64,
    pub addresses_forwarded: i64
}
