use std::sync::Arc;
use std::sync::atomic::AtomicU16;
use crate::config::structs::configuration::Configuration;
use crate::probe::structs::info_hash::InfoHash;
use crate::registry::structs::probe_registry::ProbeRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Shared state of the whole service.
///
/// The registries are owned instances, never global: tests and multiple
/// deployments in one process construct their own `ProbeService`.
pub struct ProbeService {
    pub config: Arc<Configuration>,
    pub dns_registry: Arc<ProbeRegistry<u32>>,
    pub tracker_registry: Arc<ProbeRegistry<InfoHash>>,
    /// Port the tracker listener actually bound, advertised in magnet links.
    pub tracker_port: AtomicU16,
    pub stats: Arc<StatsAtomics>
}
