#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ConnectionId(pub i64);
