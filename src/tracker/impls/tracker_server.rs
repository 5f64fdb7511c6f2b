use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use rand::RngExt;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use crate::probe::structs::probe_service::ProbeService;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::request::Request;
use crate::tracker::enums::request_parse_error::RequestParseError;
use crate::tracker::enums::response::Response;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::connect_request::ConnectRequest;
use crate::tracker::structs::connect_response::ConnectResponse;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::tracker_server::TrackerServer;
use crate::tracker::tracker::{ACTION_SCRAPE, ANNOUNCE_INTERVAL, ANNOUNCE_RESPONSE_SIZE, MAX_PACKET_SIZE, MIN_PACKET_SIZE, PROTOCOL_IDENTIFIER};

impl TrackerServer {
    #[tracing::instrument(skip(service), level = "debug")]
    pub async fn new(service: Arc<ProbeService>, bind_address: SocketAddr) -> tokio::io::Result<TrackerServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;
        let port = tokio_socket.local_addr()?.port();

        Ok(TrackerServer {
            socket: Arc::new(tokio_socket),
            service,
            port,
        })
    }

    pub fn port(&self) -> u16
    {
        self.port
    }

    #[tracing::instrument(skip_all, level = "debug")]
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let socket = self.socket.clone();
        let service = self.service.clone();
        let mut data = [0; MAX_PACKET_SIZE];

        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping UDP server on port {}...", self.port);
                    break;
                }
                result = socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            let payload = &data[..valid_bytes];
                            debug!("[TRACKER] Received {} bytes from {}", payload.len(), remote_addr);

                            if let Some(response) = TrackerServer::handle_packet(remote_addr, payload, &service) {
                                TrackerServer::send_response(socket.clone(), remote_addr, response).await;
                            }
                        }
                        Err(e) => {
                            match e.kind() {
                                std::io::ErrorKind::WouldBlock => {
                                    tokio::task::yield_now().await;
                                }
                                _ => {
                                    error!("[TRACKER] Error while reading UDP packet: {e}");
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[tracing::instrument(skip(socket), level = "debug")]
    pub async fn send_response(socket: Arc<UdpSocket>, remote_addr: SocketAddr, response: Response)
    {
        let mut buffer = Vec::with_capacity(ANNOUNCE_RESPONSE_SIZE);
        let mut cursor = Cursor::new(&mut buffer);

        match response.write(&mut cursor) {
            Ok(_) => {
                let position = cursor.position() as usize;
                if let Err(e) = socket.send_to(&buffer[..position], remote_addr).await {
                    error!("[TRACKER] Error while sending UDP packet to {remote_addr}: {e}");
                }
            }
            Err(e) => {
                debug!("[TRACKER] Could not write response to bytes: {e}");
            }
        }
    }

    /// Per-packet state machine. Returns the reply to send, if any.
    ///
    /// Never fails: malformed input is logged and absorbed so the receive
    /// loop keeps serving.
    #[tracing::instrument(skip(payload, service), level = "debug")]
    pub fn handle_packet(remote_addr: SocketAddr, payload: &[u8], service: &Arc<ProbeService>) -> Option<Response>
    {
        if payload.len() < MIN_PACKET_SIZE {
            error!("[TRACKER] Invalid packet size received from {}: {}", remote_addr, payload.len());
            match remote_addr {
                SocketAddr::V4(_) => { service.update_stats(StatsEvent::Udp4BadRequest, 1); }
                SocketAddr::V6(_) => { service.update_stats(StatsEvent::Udp6BadRequest, 1); }
            }
            return None;
        }

        match Request::from_bytes(payload) {
            Ok(Request::Connect(request)) => {
                Some(TrackerServer::handle_connect(remote_addr, &request, service))
            }
            Ok(Request::Announce(request)) => {
                Some(TrackerServer::handle_announce(remote_addr, &request, service))
            }
            Err(RequestParseError::UnsupportedAction(ACTION_SCRAPE)) => {
                // not implemented
                debug!("[TRACKER] Ignoring scrape request from {remote_addr}");
                None
            }
            Err(error) => {
                error!("[TRACKER] Failed to parse request from {remote_addr}: {error}");
                match remote_addr {
                    SocketAddr::V4(_) => { service.update_stats(StatsEvent::Udp4BadRequest, 1); }
                    SocketAddr::V6(_) => { service.update_stats(StatsEvent::Udp6BadRequest, 1); }
                }
                None
            }
        }
    }

    #[tracing::instrument(skip(request, service), level = "debug")]
    pub fn handle_connect(remote_addr: SocketAddr, request: &ConnectRequest, service: &Arc<ProbeService>) -> Response
    {
        if request.protocol_id != PROTOCOL_IDENTIFIER {
            warn!("[TRACKER] Unknown protocol_id received from {}: {:#x}", remote_addr, request.protocol_id);
        }

        // No state is kept about issued ids; any value is accepted on announce.
        let mut rng = rand::rng();
        let connection_id = ConnectionId(rng.random());

        let stats_event = if remote_addr.is_ipv4() {
            StatsEvent::Udp4ConnectionsHandled
        } else {
            StatsEvent::Udp6ConnectionsHandled
        };
        service.update_stats(stats_event, 1);

        Response::from(ConnectResponse {
            transaction_id: request.transaction_id,
            connection_id,
        })
    }

    #[tracing::instrument(skip(request, service), level = "debug")]
    pub fn handle_announce(remote_addr: SocketAddr, request: &AnnounceRequest, service: &Arc<ProbeService>) -> Response
    {
        if let Some(sink) = service.tracker_registry.lookup(&request.info_hash) {
            sink.deliver(remote_addr.ip());
            service.update_stats(StatsEvent::TrackerTokensMatched, 1);
        }

        if let Some(ip) = request.ip_address {
            warn!("[TRACKER] IP address field not supported. {} set it to: {}:{}", remote_addr, ip, request.port);
        }

        let stats_event = if remote_addr.is_ipv4() {
            StatsEvent::Udp4AnnouncesHandled
        } else {
            StatsEvent::Udp6AnnouncesHandled
        };
        service.update_stats(stats_event, 1);

        Response::from(AnnounceResponse {
            transaction_id: request.transaction_id,
            interval: ANNOUNCE_INTERVAL,
            leechers: 0,
            seeders: 0,
        })
    }
}
