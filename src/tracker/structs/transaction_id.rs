#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TransactionId(pub i32);
