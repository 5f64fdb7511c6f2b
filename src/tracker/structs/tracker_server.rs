use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::probe::structs::probe_service::ProbeService;

pub struct TrackerServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) service: Arc<ProbeService>,
    /// Port actually bound, advertised to sessions through the service.
    pub(crate) port: u16,
}
