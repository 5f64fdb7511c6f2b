mod common;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::Ordering;
use std::time::Duration;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use leakprobe::dns::structs::dns_server::DnsServer;
use leakprobe::probe::structs::info_hash::InfoHash;
use leakprobe::tracker::enums::request::Request;
use leakprobe::tracker::structs::announce_request::AnnounceRequest;
use leakprobe::tracker::structs::connect_request::ConnectRequest;
use leakprobe::tracker::structs::connection_id::ConnectionId;
use leakprobe::tracker::structs::peer_id::PeerId;
use leakprobe::tracker::structs::tracker_server::TrackerServer;
use leakprobe::tracker::structs::transaction_id::TransactionId;
use leakprobe::tracker::tracker::{tracker_service, ANNOUNCE_RESPONSE_SIZE, CONNECT_RESPONSE_SIZE, PROTOCOL_IDENTIFIER};
use leakprobe::websocket::enums::probe_type::ProbeType;
use leakprobe::websocket::structs::dns_probe_params::DnsProbeParams;

use crate::common::CollectingSink;

fn build_connect_packet(transaction_id: i32) -> Vec<u8> {
    let mut packet = vec![];
    Request::from(ConnectRequest {
        protocol_id: PROTOCOL_IDENTIFIER,
        transaction_id: TransactionId(transaction_id),
    }).write(&mut packet).unwrap();
    packet
}

fn build_announce_packet(transaction_id: i32, info_hash: InfoHash) -> Vec<u8> {
    let mut packet = vec![];
    Request::from(AnnounceRequest {
        connection_id: ConnectionId(1),
        transaction_id: TransactionId(transaction_id),
        info_hash,
        peer_id: PeerId([9u8; 20]),
        bytes_downloaded: 0,
        bytes_uploaded: 0,
        bytes_left: 0,
        event: 0,
        ip_address: None,
        key: 0,
        peers_wanted: -1,
        port: 6881,
    }).write(&mut packet).unwrap();
    packet
}

fn build_dns_query(name: &str) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(99)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), RecordType::A));
    message.to_vec().unwrap()
}

#[test]
fn test_bittorrent_probe_correlates_announce_to_session_sink() {
    let service = common::create_test_service();
    service.tracker_port.store(1337, Ordering::SeqCst);
    let sink = CollectingSink::new();

    let magnet = ProbeType::Bittorrent.issue(&service, sink.clone()).unwrap();
    let prefix = "magnet:?xt=urn:btih:";
    assert!(magnet.starts_with(prefix));
    let info_hash = InfoHash::from_str(&magnet[prefix.len()..prefix.len() + 40]).unwrap();

    let remote: SocketAddr = "203.0.113.7:51413".parse().unwrap();
    let response = TrackerServer::handle_packet(remote, &build_announce_packet(5, info_hash), &service)
        .expect("announce should be answered");

    let mut buffer = vec![];
    response.write(&mut buffer).unwrap();
    assert_eq!(buffer.len(), ANNOUNCE_RESPONSE_SIZE);
    assert_eq!(sink.delivered(), vec![remote.ip()]);
}

#[tokio::test]
async fn test_dns_probe_correlates_query_to_session_sink() {
    let service = common::create_test_service();
    let sink = CollectingSink::new();

    let message = ProbeType::Dns.issue(&service, sink.clone()).unwrap();
    let params: DnsProbeParams = serde_json::from_str(&message).unwrap();
    assert_eq!(params.base, "probe.test");

    let server = DnsServer::new(service.clone(), "127.0.0.1:0".parse().unwrap()).await.unwrap();
    let source = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 23));

    let query = build_dns_query(&format!("{}.probe.test.", params.subdomains[2]));
    let reply = server.handle_query(&query, source).expect("in-zone query should be answered");

    let parsed = Message::from_vec(&reply).unwrap();
    assert_eq!(parsed.response_code(), ResponseCode::NXDomain);
    assert_eq!(sink.delivered(), vec![source]);
}

#[test]
fn test_issued_tokens_expire_with_the_probe_timeout() {
    let service = common::create_test_service();
    let sink = CollectingSink::new();

    let message = ProbeType::Dns.issue(&service, sink).unwrap();
    let params: DnsProbeParams = serde_json::from_str(&message).unwrap();
    let token: u32 = params.subdomains[0].parse().unwrap();

    assert!(service.dns_registry.lookup(&token).is_some());
    std::thread::sleep(Duration::from_millis(1100));
    assert!(service.dns_registry.lookup(&token).is_none(), "token should expire after probe_timeout");
}

#[tokio::test]
async fn test_tracker_listener_over_udp() {
    let service = common::create_test_service();
    let (tx, rx) = tokio::sync::watch::channel(false);
    let handle = tracker_service("127.0.0.1:0".parse().unwrap(), service.clone(), rx).await;

    let port = service.tracker_port.load(Ordering::SeqCst);
    assert_ne!(port, 0, "tracker should publish its bound port");

    let client = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.connect(("127.0.0.1", port)).await.unwrap();

    client.send(&build_connect_packet(7)).await.unwrap();
    let mut buffer = [0u8; 64];
    let n = tokio::time::timeout(Duration::from_secs(2), client.recv(&mut buffer))
        .await.expect("connect response should arrive").unwrap();
    assert_eq!(n, CONNECT_RESPONSE_SIZE);
    assert_eq!(&buffer[0..4], &0i32.to_be_bytes());
    assert_eq!(&buffer[4..8], &7i32.to_be_bytes());

    let sink = CollectingSink::new();
    let info_hash = InfoHash([0x33; 20]);
    service.tracker_registry.register(info_hash, sink.clone());

    client.send(&build_announce_packet(8, info_hash)).await.unwrap();
    let n = tokio::time::timeout(Duration::from_secs(2), client.recv(&mut buffer))
        .await.expect("announce response should arrive").unwrap();
    assert_eq!(n, ANNOUNCE_RESPONSE_SIZE);
    assert_eq!(&buffer[4..8], &8i32.to_be_bytes());

    assert_eq!(sink.delivered(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);

    let _ = tx.send(true);
    let _ = handle.await;
}

#[tokio::test]
async fn test_dns_listener_over_udp() {
    let service = common::create_test_service();
    let sink = CollectingSink::new();
    service.dns_registry.register(424242, sink.clone());

    let server = DnsServer::new(service, "127.0.0.1:0".parse().unwrap()).await.unwrap();
    let port = server.port();
    let (tx, rx) = tokio::sync::watch::channel(false);
    let handle = tokio::spawn(async move {
        server.start(rx).await;
    });

    let client = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.connect(("127.0.0.1", port)).await.unwrap();

    client.send(&build_dns_query("424242.probe.test.")).await.unwrap();
    let mut buffer = [0u8; 512];
    let n = tokio::time::timeout(Duration::from_secs(2), client.recv(&mut buffer))
        .await.expect("dns reply should arrive").unwrap();

    let reply = Message::from_vec(&buffer[..n]).unwrap();
    assert_eq!(reply.id(), 99);
    assert_eq!(reply.response_code(), ResponseCode::NXDomain);
    assert_eq!(sink.delivered(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);

    let _ = tx.send(true);
    let _ = handle.await;
}
