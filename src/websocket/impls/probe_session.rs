use std::net::IpAddr;
use std::sync::Arc;
use actix::prelude::*;
use actix_web_actors::ws;
use log::{debug, error, info};
use uuid::Uuid;
use crate::registry::traits::address_sink::AddressSink;
use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::enums::probe_type::ProbeType;
use crate::websocket::structs::observed_address::ObservedAddress;
use crate::websocket::structs::probe_session::ProbeSession;
use crate::websocket::structs::session_sink::SessionSink;
use crate::websocket::structs::websocket_service_data::WebsocketServiceData;

impl ProbeSession {
    pub fn new(data: Arc<WebsocketServiceData>, probe_type: ProbeType) -> ProbeSession {
        ProbeSession {
            data,
            probe_type,
            session_id: Uuid::new_v4(),
            seen: Default::default(),
        }
    }

    /// First sighting of an address within this session, by canonical
    /// string form.
    pub fn first_seen(&mut self, address: &IpAddr) -> bool {
        self.seen.insert(address.to_string())
    }
}

impl Actor for ProbeSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let service = self.data.service.clone();
        let sink: Arc<dyn AddressSink> = Arc::new(SessionSink::new(ctx.address().recipient()));

        let initial_message = match self.probe_type.issue(&service, sink) {
            Some(message) => message,
            None => {
                ctx.close(Some(ws::CloseReason { code: ws::CloseCode::Error, description: None }));
                ctx.stop();
                return;
            }
        };

        service.update_stats(StatsEvent::SessionsOpened, 1);
        info!("[WEBSOCKET] Session {} opened for {:?} probe", self.session_id, self.probe_type);
        ctx.text(initial_message);

        // The dwell window is fixed at session start and never renewed by
        // activity; registry entries outlive the session only until their
        // own TTL runs out.
        let dwell = self.probe_type.dwell(&service.config);
        ctx.run_later(dwell, |act, ctx| {
            debug!("[WEBSOCKET] Session {} dwell elapsed, closing", act.session_id);
            ctx.close(Some(ws::CloseReason { code: ws::CloseCode::Normal, description: None }));
            ctx.stop();
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.data.service.update_stats(StatsEvent::SessionsClosed, 1);
        debug!("[WEBSOCKET] Session {} stopped", self.session_id);
    }
}

impl Handler<ObservedAddress> for ProbeSession {
    type Result = ();

    fn handle(&mut self, msg: ObservedAddress, ctx: &mut Self::Context) {
        if self.first_seen(&msg.address) {
            debug!("[WEBSOCKET] Session {} forwarding observed address {}", self.session_id, msg.address);
            self.data.service.update_stats(StatsEvent::AddressesForwarded, 1);
            ctx.text(msg.address.to_string());
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ProbeSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Close(reason)) => {
                debug!("[WEBSOCKET] Session {} close received: {:?}", self.session_id, reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[WEBSOCKET] Session {} websocket error: {e}", self.session_id);
                ctx.stop();
            }
            // anything the client sends is irrelevant to the probe
            _ => {}
        }
    }
}
