use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::connect_response::ConnectResponse;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Response {
    Connect(ConnectResponse),
    Announce(AnnounceResponse),
}
