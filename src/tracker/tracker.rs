use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{error, info};
use tokio::task::JoinHandle;
use crate::probe::structs::probe_service::ProbeService;
use crate::tracker::structs::tracker_server::TrackerServer;

pub const PROTOCOL_IDENTIFIER: i64 = 0x41727101980;

pub const ACTION_CONNECT: i32 = 0;
pub const ACTION_ANNOUNCE: i32 = 1;
pub const ACTION_SCRAPE: i32 = 2;

/// Smallest packet carrying an action field.
pub const MIN_PACKET_SIZE: usize = 12;
pub const CONNECT_REQUEST_SIZE: usize = 16;
pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const ANNOUNCE_REQUEST_SIZE: usize = 98;
pub const ANNOUNCE_RESPONSE_SIZE: usize = 20;
pub const MAX_PACKET_SIZE: usize = 1496;

/// Announce interval reported to clients. Zero: probes are one-shot, the
/// response only exists to close the handshake.
pub const ANNOUNCE_INTERVAL: i32 = 0;

#[tracing::instrument(skip(data, rx), level = "debug")]
pub async fn tracker_service(addr: SocketAddr, data: Arc<ProbeService>, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    let tracker_server = TrackerServer::new(data.clone(), addr).await.unwrap_or_else(|e| {
        error!("Could not listen to the UDP port: {e}");
        exit(1);
    });

    data.tracker_port.store(tracker_server.port(), Ordering::SeqCst);
    info!("[TRACKER] Starting a server listener on {addr} (port {})", tracker_server.port());

    tokio::spawn(async move {
        tracker_server.start(rx).await;
    })
}
