pub mod dns_probe_params;
pub mod observed_address;
pub mod probe_session;
pub mod session_sink;
pub mod websocket_service_data;
