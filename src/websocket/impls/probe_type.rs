use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::error;
use rand::RngExt;
use crate::config::structs::configuration::Configuration;
use crate::probe::structs::info_hash::InfoHash;
use crate::probe::structs::probe_service::ProbeService;
use crate::registry::traits::address_sink::AddressSink;
use crate::websocket::enums::probe_type::ProbeType;
use crate::websocket::structs::dns_probe_params::DnsProbeParams;
use crate::websocket::websocket::DNS_PROBE_TOKENS;

impl ProbeType {
    /// Fixed session lifetime for this probe flavor.
    pub fn dwell(&self, config: &Configuration) -> Duration {
        match self {
            ProbeType::Dns => Duration::from_secs(config.dns_probe.probe_timeout),
            ProbeType::Bittorrent => Duration::from_secs(config.tracker_probe.probe_timeout),
        }
    }

    /// Issues fresh random tokens into the matching registry and formats
    /// the session's initial message.
    ///
    /// DNS sessions get a JSON object with the parent zone and the decimal
    /// subdomain labels; BitTorrent sessions get a magnet link embedding
    /// the hex info-hash and the tracker's reachable address.
    pub fn issue(&self, service: &Arc<ProbeService>, sink: Arc<dyn AddressSink>) -> Option<String> {
        let mut rng = rand::rng();

        match self {
            ProbeType::Dns => {
                let mut params = DnsProbeParams {
                    base: service.config.dns_probe.top_domain.clone(),
                    subdomains: Vec::with_capacity(DNS_PROBE_TOKENS),
                };
                for _ in 0..DNS_PROBE_TOKENS {
                    let token: u32 = rng.random();
                    service.dns_registry.register(token, sink.clone());
                    params.subdomains.push(token.to_string());
                }
                match serde_json::to_string(&params) {
                    Ok(message) => Some(message),
                    Err(e) => {
                        error!("[WEBSOCKET] Cannot serialize DNS probe params: {e}");
                        None
                    }
                }
            }
            ProbeType::Bittorrent => {
                let info_hash = InfoHash(rng.random());
                service.tracker_registry.register(info_hash, sink);
                let port = service.tracker_port.load(Ordering::SeqCst);
                Some(format!(
                    "magnet:?xt=urn:btih:{}&tr=udp://{}:{}",
                    info_hash, service.config.tracker_probe.external_host, port
                ))
            }
        }
    }
}
