//! # Leakprobe
//!
//! A leak-detection probe service built with Rust, Actix-web and Tokio.
//!
//! ## Overview
//!
//! Leakprobe issues short-lived correlation tokens to clients over a
//! websocket session and waits for those tokens to come back through
//! out-of-band network paths: a DNS query carrying a token-derived subdomain,
//! or a BitTorrent UDP tracker announce keyed by a token-derived info-hash.
//! Any inbound arrival reveals the real source IP address of the network
//! stack that handled the out-of-band request, which is relayed back to the
//! waiting client. The service is used to expose IP addresses leaking
//! outside a privacy tunnel (VPN, proxy, Tor).
//!
//! ## Architecture
//!
//! ```text
//! websocket session ── issues tokens ──> ProbeRegistry (per probe type)
//!                                             ^
//!                                             | lookup
//!                          DNS listener ──────┤
//!                          UDP tracker ───────┘
//!                                             |
//!                          deliver(source IP) v
//! websocket session <── dedup + forward ── SessionSink
//! ```
//!
//! ## Features
//!
//! - **DNS probe**: answers every query under its zone with NXDOMAIN while
//!   correlating numeric subdomain labels against issued tokens
//! - **BitTorrent probe**: minimal UDP tracker (connect/announce) correlating
//!   announced info-hashes against issued tokens
//! - **Websocket delivery**: per-session actor with deduplication and a
//!   fixed dwell window, served on `/v1/dns` and `/v1/bittorrent`
//! - **SSL/TLS**: optional rustls termination for the websocket server
//! - **Monitoring**: real-time counters dumped to the console log

/// Common utilities and shared functionality.
///
/// Logging setup, bind checks and hex helpers used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and saving the TOML configuration covering the
/// websocket server and both probe listeners.
pub mod config;

/// DNS probe listener.
///
/// Serves one configured zone, extracts numeric tokens from subdomain
/// labels and always answers with a name error.
pub mod dns;

/// Central probe service object.
///
/// Owns the configuration, the token registries for both probe types and
/// the runtime statistics.
pub mod probe;

/// Time-bounded token registry.
///
/// Maps opaque correlation tokens to one-shot delivery sinks shared between
/// the protocol listeners and the live websocket sessions.
pub mod registry;

/// Statistics tracking module.
///
/// Atomic counters for listener and session activity, dumped periodically
/// to the console.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// BitTorrent UDP tracker probe listener.
///
/// Implements the connect/announce subset of the UDP tracker protocol
/// needed to observe which network stack performs an announce.
pub mod tracker;

/// Websocket session module.
///
/// Per-client probe sessions: token issuance, address deduplication and
/// timed closure over an actix websocket actor.
pub mod websocket;
