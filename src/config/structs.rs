pub mod configuration;
pub mod dns_probe_config;
pub mod tracker_probe_config;
pub mod websocket_server_config;
