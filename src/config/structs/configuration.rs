use serde::{Deserialize, Serialize};
use crate::config::structs::dns_probe_config::DnsProbeConfig;
use crate::config::structs::tracker_probe_config::TrackerProbeConfig;
use crate::config::structs::websocket_server_config::WebsocketServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub registry_cleanup_interval: u64,
    pub websocket_server: WebsocketServerConfig,
    pub dns_probe: DnsProbeConfig,
    pub tracker_probe: TrackerProbeConfig
}
