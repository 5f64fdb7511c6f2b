use std::net::IpAddr;
use actix::prelude::*;

/// Source address observed by a protocol listener, on its way to the
/// session that issued the matching token.
#[derive(Message, PartialEq, Eq, Clone, Copy, Debug)]
#[rtype(result = "()")]
pub struct ObservedAddress {
    pub address: IpAddr
}
