use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use crate::registry::structs::probe_registry::ProbeRegistry;
use crate::registry::structs::registry_entry::RegistryEntry;
use crate::registry::traits::address_sink::AddressSink;

impl<K: Ord + Copy> ProbeRegistry<K> {
    pub fn new(ttl: Duration) -> ProbeRegistry<K>
    {
        ProbeRegistry {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            ttl
        }
    }

    /// Stores or replaces the sink for `token` and restarts its expiry window.
    pub fn register(&self, token: K, sink: Arc<dyn AddressSink>)
    {
        let map = self.entries.clone();
        let mut lock = map.write();
        lock.insert(token, RegistryEntry {
            sink,
            expires_at: Instant::now() + self.ttl
        });
    }

    /// Returns the sink for `token` if present and not expired.
    ///
    /// The entry is left in place: the same token may be looked up any
    /// number of times within its window. Looking up never extends the
    /// window.
    pub fn lookup(&self, token: &K) -> Option<Arc<dyn AddressSink>>
    {
        let map = self.entries.clone();
        let lock = map.read();
        match lock.get(token) {
            None => None,
            Some(entry) => {
                if entry.expires_at <= Instant::now() {
                    return None;
                }
                Some(entry.sink.clone())
            }
        }
    }

    /// Removes expired entries, returning how many were dropped.
    pub fn clean_expired(&self) -> usize
    {
        let map = self.entries.clone();
        let mut lock = map.write();
        let now = Instant::now();
        let before = lock.len();
        lock.retain(|_, entry| entry.expires_at > now);
        before - lock.len()
    }

    pub fn len(&self) -> usize
    {
        let map = self.entries.clone();
        let lock = map.read();
        lock.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}
