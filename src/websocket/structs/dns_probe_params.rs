use serde::{Deserialize, Serialize};

/// Initial message of a DNS probe session: the parent zone and the decimal
/// subdomain labels the client should resolve.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DnsProbeParams {
    pub base: String,
    pub subdomains: Vec<String>
}
