use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::probe::structs::probe_service::ProbeService;

pub struct WebsocketServiceData {
    pub service: Arc<ProbeService>,
    pub config: Arc<Configuration>
}
