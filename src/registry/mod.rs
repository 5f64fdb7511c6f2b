//! Time-bounded token registry.
//!
//! The registry is the single shared mutable structure of the service: a
//! mapping from opaque correlation tokens to delivery sinks, written by the
//! websocket sessions and read by the protocol listeners. Entries carry a
//! fixed time-to-live; an entry registered with TTL `d` becomes unreachable
//! through lookup no earlier than `d` and is reclaimed by a periodic sweep.
//!
//! Lookups never consume an entry, so the same token may be triggered
//! multiple times within its window (repeated queries or announces for the
//! same probe). Re-registering a token replaces the sink and restarts the
//! window. One instance exists per probe type.

/// Implementation blocks for the registry.
pub mod impls;

/// Registry data structures.
pub mod structs;

/// Delivery capability traits.
pub mod traits;
