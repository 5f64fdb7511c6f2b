use std::sync::atomic::Ordering;
use crate::probe::structs::probe_service::ProbeService;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl ProbeService {
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let stats = self.stats.clone();
        match event {
            StatsEvent::Udp4ConnectionsHandled => { stats.udp4_connections_handled.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::Udp6ConnectionsHandled => { stats.udp6_connections_handled.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::Udp4AnnouncesHandled => { stats.udp4_announces_handled.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::Udp6AnnouncesHandled => { stats.udp6_announces_handled.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::Udp4BadRequest => { stats.udp4_bad_request.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::Udp6BadRequest => { stats.udp6_bad_request.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::DnsQueriesHandled => { stats.dns_queries_handled.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::DnsBadRequest => { stats.dns_bad_request.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::DnsTokensMatched => { stats.dns_tokens_matched.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::TrackerTokensMatched => { stats.tracker_tokens_matched.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::SessionsOpened => { stats.sessions_opened.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::SessionsClosed => { stats.sessions_closed.fetch_add(value, Ordering::SeqCst); }
            StatsEvent::AddressesForwarded => { stats.addresses_forwarded.fetch_add(value, Ordering::SeqCst); }
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        let stats = self.stats.clone();
        Stats {
            started: stats.started.load(Ordering::SeqCst),
            udp4_connections_handled: stats.udp4_connections_handled.load(Ordering::SeqCst),
            udp6_connections_handled: stats.udp6_connections_handled.load(Ordering::SeqCst),
            udp4_announces_handled: stats.udp4_announces_handled.load(Ordering::SeqCst),
            udp6_announces_handled: stats.udp6_announces_handled.load(Ordering::SeqCst),
            udp4_bad_request: stats.udp4_bad_request.load(Ordering::SeqCst),
            udp6_bad_request: stats.udp6_bad_request.load(Ordering::SeqCst),
            dns_queries_handled: stats.dns_queries_handled.load(Ordering::SeqCst),
            dns_bad_request: stats.dns_bad_request.load(Ordering::SeqCst),
            dns_tokens_matched: stats.dns_tokens_matched.load(Ordering::SeqCst),
            tracker_tokens_matched: stats.tracker_tokens_matched.load(Ordering::SeqCst),
            sessions_opened: stats.sessions_opened.load(Ordering::SeqCst),
            sessions_closed: stats.sessions_closed.load(Ordering::SeqCst),
            addresses_forwarded: stats.addresses_forwarded.load(Ordering::SeqCst)
        }
    }
}
