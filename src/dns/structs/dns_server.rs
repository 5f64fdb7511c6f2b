use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::probe::structs::probe_service::ProbeService;

pub struct DnsServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) service: Arc<ProbeService>,
    /// Parent zone, lowercased, without a trailing dot.
    pub(crate) top_domain: String,
    pub(crate) port: u16,
}
