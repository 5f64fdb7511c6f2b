/// The closed set of probe flavors a session can run.
///
/// Selected by the websocket route, never by runtime type inspection. Each
/// variant knows how to issue its tokens, format its initial message and
/// how long its sessions dwell.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ProbeType {
    Dns,
    Bittorrent
}
