//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// For the tracker probe the info hash is not a torrent digest but an opaque
/// correlation token: 20 random bytes issued to one client session and
/// announced back by whatever BitTorrent stack handles the magnet link.
///
/// Rendered as a 40-character lowercase hexadecimal string in magnet links.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
