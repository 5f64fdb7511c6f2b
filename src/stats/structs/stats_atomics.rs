use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub udp4_connections_handled: AtomicI64,
    pub udp6_connections_handled: AtomicI64,
    pub udp4_announces_handled: AtomicI64,
    pub udp6_announces_handled: AtomicI64,
    pub udp4_bad_request: AtomicI64,
    pub udp6_bad_request: AtomicI64,
    pub dns_queries_handled: AtomicI64,
    pub dns_bad_request: AtomicI64,
    pub dns_tokens_matched: AtomicI64,
    pub tracker_tokens_matched: AtomicI64,
    pub sessions_opened: AtomicI64,
    pub sessions_closed: AtomicI64,
    pub addresses_forwarded: AtomicI64
}

impl Default for StatsAtomics {
    fn default() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            udp4_connections_handled: AtomicI64::new(0),
            udp6_connections_handled: AtomicI64::new(0),
            udp4_announces_handled: AtomicI64::new(0),
            udp6_announces_handled: AtomicI64::new(0),
            udp4_bad_request: AtomicI64::new(0),
            udp6_bad_request: AtomicI64::new(0),
            dns_queries_handled: AtomicI64::new(0),
            dns_bad_request: AtomicI64::new(0),
            dns_tokens_matched: AtomicI64::new(0),
            tracker_tokens_matched: AtomicI64::new(0),
            sessions_opened: AtomicI64::new(0),
            sessions_closed: AtomicI64::new(0),
            addresses_forwarded: AtomicI64::new(0)
        }
    }
}
