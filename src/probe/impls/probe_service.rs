use std::sync::Arc;
use std::sync::atomic::AtomicU16;
use std::time::Duration;
use crate::config::structs::configuration::Configuration;
use crate::probe::structs::probe_service::ProbeService;
use crate::registry::structs::probe_registry::ProbeRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl ProbeService {
    pub fn new(config: Arc<Configuration>) -> ProbeService
    {
        let dns_ttl = Duration::from_secs(config.dns_probe.probe_timeout);
        let tracker_ttl = Duration::from_secs(config.tracker_probe.probe_timeout);
        ProbeService {
            config,
            dns_registry: Arc::new(ProbeRegistry::new(dns_ttl)),
            tracker_registry: Arc::new(ProbeRegistry::new(tracker_ttl)),
            tracker_port: AtomicU16::new(0),
            stats: Arc::new(StatsAtomics::default())
        }
    }
}
