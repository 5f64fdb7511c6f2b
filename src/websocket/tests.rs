#[cfg(test)]
mod websocket_tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use parking_lot::Mutex;
    use crate::config::structs::configuration::Configuration;
    use crate::probe::structs::info_hash::InfoHash;
    use crate::probe::structs::probe_service::ProbeService;
    use crate::registry::traits::address_sink::AddressSink;
    use crate::websocket::enums::probe_type::ProbeType;
    use crate::websocket::structs::dns_probe_params::DnsProbeParams;
    use crate::websocket::structs::probe_session::ProbeSession;
    use crate::websocket::structs::websocket_service_data::WebsocketServiceData;
    use crate::websocket::websocket::DNS_PROBE_TOKENS;

    struct CollectingSink {
        delivered: Mutex<Vec<IpAddr>>
    }

    impl CollectingSink {
        fn new() -> Arc<CollectingSink> {
            Arc::new(CollectingSink { delivered: Mutex::new(vec![]) })
        }

        fn delivered(&self) -> Vec<IpAddr> {
            self.delivered.lock().clone()
        }
    }

    impl AddressSink for CollectingSink {
        fn deliver(&self, address: IpAddr) {
            self.delivered.lock().push(address);
        }
    }

    fn create_test_service() -> Arc<ProbeService> {
        let mut config = Configuration::init();
        config.dns_probe.top_domain = String::from("probe.test");
        config.tracker_probe.external_host = String::from("probe.test");
        Arc::new(ProbeService::new(Arc::new(config)))
    }

    fn create_test_data(service: &Arc<ProbeService>) -> Arc<WebsocketServiceData> {
        Arc::new(WebsocketServiceData {
            service: service.clone(),
            config: service.config.clone(),
        })
    }

    #[test]
    fn test_dns_probe_issues_six_registered_subdomains() {
        let service = create_test_service();
        let sink = CollectingSink::new();
        let message = ProbeType::Dns.issue(&service, sink).unwrap();

        let params: DnsProbeParams = serde_json::from_str(&message).unwrap();
        assert_eq!(params.base, "probe.test");
        assert_eq!(params.subdomains.len(), DNS_PROBE_TOKENS);
        assert_eq!(service.dns_registry.len(), DNS_PROBE_TOKENS, "tokens should be distinct and registered");

        for subdomain in &params.subdomains {
            let token: u32 = subdomain.parse().expect("subdomains are decimal u32 labels");
            assert!(service.dns_registry.lookup(&token).is_some());
        }
    }

    #[test]
    fn test_dns_tokens_deliver_to_the_issuing_sink() {
        let service = create_test_service();
        let sink = CollectingSink::new();
        let message = ProbeType::Dns.issue(&service, sink.clone()).unwrap();
        let params: DnsProbeParams = serde_json::from_str(&message).unwrap();

        let token: u32 = params.subdomains[0].parse().unwrap();
        let source = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 9));
        service.dns_registry.lookup(&token).unwrap().deliver(source);

        assert_eq!(sink.delivered(), vec![source]);
    }

    #[test]
    fn test_bittorrent_probe_issues_magnet_link() {
        let service = create_test_service();
        service.tracker_port.store(1337, Ordering::SeqCst);
        let message = ProbeType::Bittorrent.issue(&service, CollectingSink::new()).unwrap();

        let prefix = "magnet:?xt=urn:btih:";
        let suffix = "&tr=udp://probe.test:1337";
        assert!(message.starts_with(prefix), "unexpected magnet link: {message}");
        assert!(message.ends_with(suffix), "unexpected magnet link: {message}");

        let hex = &message[prefix.len()..message.len() - suffix.len()];
        assert_eq!(hex.len(), 40);
        let info_hash = InfoHash::from_str(hex).expect("magnet carries a 40 character hex token");

        assert_eq!(service.tracker_registry.len(), 1);
        assert!(service.tracker_registry.lookup(&info_hash).is_some());
    }

    #[test]
    fn test_sessions_never_share_tokens() {
        let service = create_test_service();
        let first_sink = CollectingSink::new();
        let second_sink = CollectingSink::new();

        let first: DnsProbeParams = serde_json::from_str(
            &ProbeType::Dns.issue(&service, first_sink.clone()).unwrap()).unwrap();
        let second: DnsProbeParams = serde_json::from_str(
            &ProbeType::Dns.issue(&service, second_sink.clone()).unwrap()).unwrap();

        assert_eq!(service.dns_registry.len(), 2 * DNS_PROBE_TOKENS);
        for subdomain in &first.subdomains {
            assert!(!second.subdomains.contains(subdomain));
        }

        let token: u32 = first.subdomains[3].parse().unwrap();
        let source = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1));
        service.dns_registry.lookup(&token).unwrap().deliver(source);

        assert_eq!(first_sink.delivered(), vec![source]);
        assert!(second_sink.delivered().is_empty(), "sessions must not observe each other's addresses");
    }

    #[test]
    fn test_session_dedups_addresses_by_canonical_form() {
        let service = create_test_service();
        let mut session = ProbeSession::new(create_test_data(&service), ProbeType::Dns);

        let first = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        let second = IpAddr::V6(Ipv6Addr::LOCALHOST);

        assert!(session.first_seen(&first));
        assert!(!session.first_seen(&first), "duplicate address must be dropped");
        assert!(session.first_seen(&second));
        assert!(!session.first_seen(&second));
        assert!(session.first_seen(&IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2))));
    }

    #[test]
    fn test_dwell_durations_follow_configuration() {
        let mut config = Configuration::init();
        config.dns_probe.probe_timeout = 11;
        config.tracker_probe.probe_timeout = 22;
        assert_eq!(ProbeType::Dns.dwell(&config), Duration::from_secs(11));
        assert_eq!(ProbeType::Bittorrent.dwell(&config), Duration::from_secs(22));
    }
}
