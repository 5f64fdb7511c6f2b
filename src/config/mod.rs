//! Configuration management module.
//!
//! Handles loading, parsing and validating the service configuration from
//! a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **websocket_server**: the client-facing websocket endpoint
//! - **dns_probe**: the DNS listener and its parent zone
//! - **tracker_probe**: the BitTorrent UDP tracker listener
//!
//! Probe timeouts double as the session dwell duration and the token
//! registry time-to-live of the respective probe type.

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
