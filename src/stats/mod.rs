//! Statistics tracking module.
//!
//! Atomic counters covering both probe listeners and the websocket
//! sessions, snapshotted periodically into the console log by the
//! `[STATS]` thread spawned from `main`.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks updating statistics on the probe service.
pub mod impls;

/// Counter block and snapshot structures.
pub mod structs;
