use actix::prelude::*;
use crate::websocket::structs::observed_address::ObservedAddress;

/// Bridge between a token registry entry and one live session.
///
/// One instance is shared by all tokens of a session; delivery is a
/// fire-and-forget send into the session actor's mailbox.
pub struct SessionSink {
    pub(crate) recipient: Recipient<ObservedAddress>
}
