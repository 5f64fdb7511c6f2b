use std::net::Ipv4Addr;
use crate::probe::structs::info_hash::InfoHash;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::transaction_id::TransactionId;

/// Full BEP 15 announce request. Only `info_hash` and the datagram source
/// address matter for correlation; the remaining fields are decoded for
/// wire conformance and otherwise ignored.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceRequest {
    pub connection_id: ConnectionId,
    pub transaction_id: TransactionId,
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub bytes_downloaded: i64,
    pub bytes_left: i64,
    pub bytes_uploaded: i64,
    pub event: i32,
    pub ip_address: Option<Ipv4Addr>,
    pub key: u32,
    pub peers_wanted: i32,
    pub port: u16,
}
