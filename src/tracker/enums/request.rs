use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::connect_request::ConnectRequest;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    Connect(ConnectRequest),
    Announce(AnnounceRequest),
}
