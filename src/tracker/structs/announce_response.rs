use crate::tracker::structs::transaction_id::TransactionId;

/// Announce response closing the handshake. Never reflects real swarm
/// state: interval, leechers and seeders are always zero.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub transaction_id: TransactionId,
    pub interval: i32,
    pub leechers: i32,
    pub seeders: i32,
}
