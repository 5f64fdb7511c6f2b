#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StatsEvent {
    Udp4ConnectionsHandled,
    Udp6ConnectionsHandled,
    Udp4AnnouncesHandled,
    Udp6AnnouncesHandled,
    Udp4BadRequest,
    Udp6BadRequest,
    DnsQueriesHandled,
    DnsBadRequest,
    DnsTokensMatched,
    TrackerTokensMatched,
    SessionsOpened,
    SessionsClosed,
    AddressesForwarded
}
