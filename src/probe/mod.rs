//! Central probe service object.
//!
//! `ProbeService` is the shared state handed to every listener and session:
//! the configuration, one token registry per probe type, the bound tracker
//! port and the runtime statistics. It is created once in `main` and passed
//! around as an `Arc`.

/// Implementation blocks for the probe service and tokens.
pub mod impls;

/// Probe service data structures.
pub mod structs;
