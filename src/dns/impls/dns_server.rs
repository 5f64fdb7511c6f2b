use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use log::{debug, error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use crate::dns::dns::MAX_PACKET_SIZE;
use crate::dns::structs::dns_server::DnsServer;
use crate::probe::structs::probe_service::ProbeService;
use crate::stats::enums::stats_event::StatsEvent;

impl DnsServer {
    #[tracing::instrument(skip(service), level = "debug")]
    pub async fn new(service: Arc<ProbeService>, bind_address: SocketAddr) -> tokio::io::Result<DnsServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;
        let port = tokio_socket.local_addr()?.port();

        let top_domain = service.config.dns_probe.top_domain
            .trim_end_matches('.')
            .to_lowercase();

        Ok(DnsServer {
            socket: Arc::new(tokio_socket),
            service,
            top_domain,
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
        let mut data = [0; MAX_PACKET_SIZE];

        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[DNS] Stopping DNS server for zone {}...", self.top_domain);
                    break;
                }
                result = socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            let payload = &data[..valid_bytes];
                            debug!("[DNS] Received {} bytes from {}", payload.len(), remote_addr);

                            if let Some(reply) = self.handle_query(payload, remote_addr.ip()) {
                                if let Err(e) = socket.send_to(&reply, remote_addr).await {
                                    error!("[DNS] Error while sending reply to {remote_addr}: {e}");
                                }
                            }
                        }
                        Err(e) => {
                            match e.kind() {
                                std::io::ErrorKind::WouldBlock => {
                                    tokio::task::yield_now().await;
                                }
                                _ => {
                                    error!("[DNS] Error while reading UDP packet: {e}");
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Handles one query datagram. Returns the serialized reply, if any.
    ///
    /// The probe never resolves anything: names inside the zone get
    /// NXDOMAIN, everything else gets REFUSED. Token correlation is a side
    /// effect and never changes the answer.
    pub fn handle_query(&self, payload: &[u8], source: IpAddr) -> Option<Vec<u8>>
    {
        let message = match Message::from_vec(payload) {
            Ok(message) => message,
            Err(e) => {
                debug!("[DNS] Failed to parse query from {source}: {e}");
                self.service.update_stats(StatsEvent::DnsBadRequest, 1);
                return None;
            }
        };

        self.service.update_stats(StatsEvent::DnsQueriesHandled, 1);

        let query = match message.queries().first() {
            Some(query) => query,
            None => {
                debug!("[DNS] Query from {source} carries no question, dropping");
                return None;
            }
        };

        let mut name = query.name().to_string().to_lowercase();
        if !name.ends_with('.') {
            name.push('.');
        }

        let code = if self.in_zone(&name) {
            if let Some(token) = self.extract_token(&name) {
                if let Some(sink) = self.service.dns_registry.lookup(&token) {
                    sink.deliver(source);
                    self.service.update_stats(StatsEvent::DnsTokensMatched, 1);
                }
            }
            // avoid being queried again
            ResponseCode::NXDomain
        } else {
            ResponseCode::Refused
        };

        let mut response = Message::new();
        response
            .set_id(message.id())
            .set_message_type(MessageType::Response)
            .set_op_code(message.op_code())
            .set_recursion_desired(message.recursion_desired())
            .set_response_code(code);
        response.add_queries(message.queries().to_vec());

        match response.to_vec() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                debug!("[DNS] Failed to serialize reply for {source}: {e}");
                None
            }
        }
    }

    /// Whether a normalized (lowercase, dot-terminated) name falls under
    /// the configured zone, apex included.
    pub fn in_zone(&self, name: &str) -> bool
    {
        let apex = format!("{}.", self.top_domain);
        name == apex || name.ends_with(&format!(".{apex}"))
    }

    /// Numeric token from the labels left of the parent domain.
    ///
    /// The parent domain must be preceded by at least one label and the
    /// whole remainder must parse as an unsigned 32-bit decimal; anything
    /// else is a silent no-op.
    pub fn extract_token(&self, name: &str) -> Option<u32>
    {
        let position = name.find(self.top_domain.as_str())?;
        if position < 1 {
            return None;
        }
        name.get(..position - 1)?.parse::<u32>().ok()
    }
}
