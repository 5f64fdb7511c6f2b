use std::io;
use std::io::{Cursor, Read, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::probe::structs::info_hash::InfoHash;
use crate::tracker::enums::request::Request;
use crate::tracker::enums::request_parse_error::RequestParseError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::connect_request::ConnectRequest;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::transaction_id::TransactionId;
use crate::tracker::tracker::{ACTION_ANNOUNCE, ACTION_CONNECT, CONNECT_REQUEST_SIZE};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceRequest> for Request {
    fn from(r: AnnounceRequest) -> Self {
        Self::Announce(r)
    }
}

impl Request {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_i64::<NetworkEndian>(r.protocol_id)?;
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Announce(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(ACTION_ANNOUNCE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                bytes.write_all(&r.info_hash.0)?;
                bytes.write_all(&r.peer_id.0)?;

                bytes.write_i64::<NetworkEndian>(r.bytes_downloaded)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_left)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_uploaded)?;

                bytes.write_i32::<NetworkEndian>(r.event)?;

                bytes.write_all(&r.ip_address.map_or([0; 4], |ip| ip.octets()))?;

                bytes.write_u32::<NetworkEndian>(r.key)?;
                bytes.write_i32::<NetworkEndian>(r.peers_wanted)?;
                bytes.write_u16::<NetworkEndian>(r.port)?;
            }
        }

        Ok(())
    }

    /// Decodes a datagram of at least 16 bytes into a request.
    ///
    /// Both actions share the same minimum-size gate; an announce that
    /// clears it but ends before the 98-byte field layout fails with
    /// `Truncated` and is dropped by the caller, never answered.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RequestParseError> {
        if bytes.len() < CONNECT_REQUEST_SIZE {
            return Err(RequestParseError::TooShort(bytes.len()));
        }

        let protocol_or_connection_id = i64::from_be_bytes(bytes[0..8].try_into()
            .map_err(|_| RequestParseError::TooShort(bytes.len()))?);

        let action = i32::from_be_bytes(bytes[8..12].try_into()
            .map_err(|_| RequestParseError::TooShort(bytes.len()))?);

        let transaction_id = i32::from_be_bytes(bytes[12..16].try_into()
            .map_err(|_| RequestParseError::TooShort(bytes.len()))?);

        match action {
            ACTION_CONNECT => {
                Ok(ConnectRequest {
                    protocol_id: protocol_or_connection_id,
                    transaction_id: TransactionId(transaction_id),
                }.into())
            }

            ACTION_ANNOUNCE => {
                let mut cursor = Cursor::new(bytes);
                cursor.set_position(16);

                let mut info_hash = [0; 20];
                let mut peer_id = [0; 20];
                let mut ip = [0; 4];

                let truncated = |_: io::Error| RequestParseError::Truncated("announce");

                cursor.read_exact(&mut info_hash).map_err(truncated)?;
                cursor.read_exact(&mut peer_id).map_err(truncated)?;

                let bytes_downloaded = cursor.read_i64::<NetworkEndian>().map_err(truncated)?;
                let bytes_left = cursor.read_i64::<NetworkEndian>().map_err(truncated)?;
                let bytes_uploaded = cursor.read_i64::<NetworkEndian>().map_err(truncated)?;
                let event = cursor.read_i32::<NetworkEndian>().map_err(truncated)?;

                cursor.read_exact(&mut ip).map_err(truncated)?;

                let key = cursor.read_u32::<NetworkEndian>().map_err(truncated)?;
                let peers_wanted = cursor.read_i32::<NetworkEndian>().map_err(truncated)?;
                let port = cursor.read_u16::<NetworkEndian>().map_err(truncated)?;

                let opt_ip = if ip == [0; 4] {
                    None
                } else {
                    Some(Ipv4Addr::from(ip))
                };

                Ok(AnnounceRequest {
                    connection_id: ConnectionId(protocol_or_connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hash: InfoHash(info_hash),
                    peer_id: PeerId(peer_id),
                    bytes_downloaded,
                    bytes_uploaded,
                    bytes_left,
                    event,
                    ip_address: opt_ip,
                    key,
                    peers_wanted,
                    port,
                }.into())
            }

            other => Err(RequestParseError::UnsupportedAction(other)),
        }
    }
}
