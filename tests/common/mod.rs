#![allow(dead_code)]
use std::net::IpAddr;
use std::sync::Arc;
use parking_lot::Mutex;
use leakprobe::config::structs::configuration::Configuration;
use leakprobe::probe::structs::probe_service::ProbeService;
use leakprobe::registry::traits::address_sink::AddressSink;

pub type TestService = Arc<ProbeService>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.dns_probe.top_domain = String::from("probe.test");
    config.dns_probe.probe_timeout = 1;
    config.tracker_probe.external_host = String::from("probe.test");
    config.tracker_probe.probe_timeout = 1;
    config
}

pub fn create_test_service() -> TestService {
    Arc::new(ProbeService::new(Arc::new(create_test_config())))
}

pub struct CollectingSink {
    delivered: Mutex<Vec<IpAddr>>
}

impl CollectingSink {
    pub fn new() -> Arc<CollectingSink> {
        Arc::new(CollectingSink { delivered: Mutex::new(vec![]) })
    }

    pub fn delivered(&self) -> Vec<IpAddr> {
        self.delivered.lock().clone()
    }
}

impl AddressSink for CollectingSink {
    fn deliver(&self, address: IpAddr) {
        self.delivered.lock().push(address);
    }
}
