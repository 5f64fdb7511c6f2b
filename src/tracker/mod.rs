//! BitTorrent UDP tracker probe listener.
//!
//! Implements the connect/announce subset of the UDP tracker protocol
//! (BEP 15 wire layout). The tracker keeps no swarm state: its sole purpose
//! is to observe which network stack announces an issued info-hash token
//! and from which source address.
//!
//! # Message Types
//!
//! - **Connect** (action=0): handshake; answered with a fresh random
//!   connection id that is never stored or validated later
//! - **Announce** (action=1): the info-hash is matched against the token
//!   registry; the response always reports zero peers and a zero interval
//! - **Scrape** (action=2): not implemented, silently ignored
//!
//! Malformed or unknown packets are logged and dropped; the listener never
//! terminates on bad input.

/// Enumerations for tracker protocol requests and errors.
pub mod enums;

/// Implementation blocks for packet handling.
pub mod impls;

/// Data structures for tracker protocol messages.
pub mod structs;

/// Core tracker service implementation.
#[allow(clippy::module_inception)]
pub mod tracker;
