use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WebsocketServerConfig {
    pub bind_address: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub max_connections: usize,
    pub threads: u64,
    pub ssl: bool,
    pub ssl_key: String,
    pub ssl_cert: String,
    /// Exact `Origin` header values accepted on the websocket upgrade.
    /// Empty means any origin is accepted.
    pub allowed_origins: Vec<String>
}
