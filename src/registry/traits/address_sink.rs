use std::net::IpAddr;

/// Delivery capability held by a registry entry.
///
/// Implementations receive the source address observed for a token and must
/// not block: listeners invoke `deliver` inline from their receive loop.
pub trait AddressSink: Send + Sync {
    fn deliver(&self, address: IpAddr);
}
