use crate::tracker::structs::transaction_id::TransactionId;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ConnectRequest {
    /// Protocol magic as received. Mismatches are logged by the handler,
    /// not rejected.
    pub protocol_id: i64,
    pub transaction_id: TransactionId,
}
