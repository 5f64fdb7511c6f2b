use std::sync::Arc;
use std::time::Instant;
use crate::registry::traits::address_sink::AddressSink;

#[derive(Clone)]
pub struct RegistryEntry {
    pub(crate) sink: Arc<dyn AddressSink>,
    pub(crate) expires_at: Instant
}
