use std::io;
use std::io::Write;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::tracker::enums::response::Response;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::connect_response::ConnectResponse;
use crate::tracker::tracker::{ACTION_ANNOUNCE, ACTION_CONNECT};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceResponse> for Response {
    fn from(r: AnnounceResponse) -> Self {
        Self::Announce(r)
    }
}

impl Response {
    #[tracing::instrument(skip(bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Announce(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_ANNOUNCE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i32::<NetworkEndian>(r.interval)?;
                bytes.write_i32::<NetworkEndian>(r.leechers)?;
                bytes.write_i32::<NetworkEndian>(r.seeders)?;
            }
        }

        Ok(())
    }
}
