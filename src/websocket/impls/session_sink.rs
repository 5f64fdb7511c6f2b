use std::net::IpAddr;
use actix::prelude::*;
use log::debug;
use crate::registry::traits::address_sink::AddressSink;
use crate::websocket::structs::observed_address::ObservedAddress;
use crate::websocket::structs::session_sink::SessionSink;

impl SessionSink {
    pub fn new(recipient: Recipient<ObservedAddress>) -> SessionSink {
        SessionSink { recipient }
    }
}

impl AddressSink for SessionSink {
    fn deliver(&self, address: IpAddr) {
        // A full mailbox or an already-closed session drops the
        // notification; the listener must never block or panic here.
        if let Err(e) = self.recipient.try_send(ObservedAddress { address }) {
            debug!("[WEBSOCKET] Dropping observed address {address}: {e}");
        }
    }
}
