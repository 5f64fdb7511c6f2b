use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use log::{error, info};
use tokio::task::JoinHandle;
use crate::dns::structs::dns_server::DnsServer;
use crate::probe::structs::probe_service::ProbeService;

/// Largest UDP query the listener accepts (EDNS0 payload ceiling).
pub const MAX_PACKET_SIZE: usize = 4096;

#[tracing::instrument(skip(data, rx), level = "debug")]
pub async fn dns_service(addr: SocketAddr, data: Arc<ProbeService>, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let dns_server = DnsServer::new(data, addr).await.unwrap_or_else(|e| {
        error!("Could not listen to the DNS port: {e}");
        exit(1);
    });

    info!("[DNS] Starting a server listener on {addr} for zone {}", dns_server.top_domain);

    tokio::spawn(async move {
        dns_server.start(rx).await;
    })
}
