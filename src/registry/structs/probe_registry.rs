use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use crate::registry::structs::registry_entry::RegistryEntry;

/// Token-to-sink mapping with a fixed per-entry time-to-live.
///
/// `K` is the token type: `u32` for DNS probes, `InfoHash` for tracker
/// probes. Registration and lookup are safe from any thread; entries are
/// independently owned per token.
pub struct ProbeRegistry<K> {
    pub(crate) entries: Arc<RwLock<BTreeMap<K, RegistryEntry>>>,
    pub(crate) ttl: Duration
}
