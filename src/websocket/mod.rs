//! Websocket session module.
//!
//! The client-facing side of the service: an actix-web server exposing one
//! websocket endpoint per probe type (`/v1/dns`, `/v1/bittorrent`). Each
//! accepted upgrade becomes a `ProbeSession` actor that issues fresh tokens,
//! sends the client the initial probe material, forwards every first-seen
//! observed address as a text frame and closes the channel once the fixed
//! dwell window elapses.
//!
//! Listener threads never block on a session: observed addresses are handed
//! over as fire-and-forget actor messages and the actor mailbox acts as the
//! bounded delivery queue.

/// Probe type enumeration.
pub mod enums;

/// Implementation blocks for sessions and token issuance.
pub mod impls;

/// Session and message structures.
pub mod structs;

/// Core websocket service implementation.
#[allow(clippy::module_inception)]
pub mod websocket;

#[cfg(test)]
mod tests;
