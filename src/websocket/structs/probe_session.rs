use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;
use crate::websocket::enums::probe_type::ProbeType;
use crate::websocket::structs::websocket_service_data::WebsocketServiceData;

/// One client probe session.
///
/// Exclusively owns its dedup set; listeners only ever reach it through
/// its mailbox.
pub struct ProbeSession {
    pub(crate) data: Arc<WebsocketServiceData>,
    pub(crate) probe_type: ProbeType,
    pub(crate) session_id: Uuid,
    pub(crate) seen: HashSet<String>
}
