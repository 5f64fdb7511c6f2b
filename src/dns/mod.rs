//! DNS probe listener.
//!
//! Serves exactly one configured parent zone. The leftmost label of a query
//! under the zone is parsed as a numeric correlation token and matched
//! against the DNS token registry; the source address of the query is what
//! gets correlated, not anything inside the message.
//!
//! Every query under the zone is answered with NXDOMAIN so resolvers never
//! cache a positive result and every probe stays a single-shot network
//! event. Queries outside the zone are answered REFUSED.

/// Core DNS service implementation.
#[allow(clippy::module_inception)]
pub mod dns;

/// Implementation blocks for query handling.
pub mod impls;

/// DNS listener data structures.
pub mod structs;
