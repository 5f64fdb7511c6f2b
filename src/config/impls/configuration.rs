use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use log::{error, info};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::dns_probe_config::DnsProbeConfig;
use crate::config::structs::tracker_probe_config::TrackerProbeConfig;
use crate::config::structs::websocket_server_config::WebsocketServerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            registry_cleanup_interval: 60,
            websocket_server: WebsocketServerConfig {
                bind_address: String::from("0.0.0.0:8080"),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                max_connections: 25000,
                threads: available_parallelism().unwrap().get() as u64,
                ssl: false,
                ssl_key: String::from(""),
                ssl_cert: String::from(""),
                allowed_origins: vec![]
            },
            dns_probe: DnsProbeConfig {
                bind_address: String::from("0.0.0.0:5353"),
                top_domain: String::from("leak.example.com"),
                probe_timeout: 30
            },
            tracker_probe: TrackerProbeConfig {
                bind_address: String::from("0.0.0.0:6969"),
                external_host: String::from("leak.example.com"),
                probe_timeout: 30
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e)),
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file("config.toml") {
            Ok(config) => {
                info!("[CONFIG] Loaded config.toml");
                Ok(config)
            }
            Err(error) => {
                error!("[CONFIG] Unable to load config.toml: {error}");
                if !create {
                    return Err(error);
                }
                let config = Configuration::init();
                match toml::to_string(&config) {
                    Ok(data) => {
                        Configuration::save_file("config.toml", data)?;
                        info!("[CONFIG] Created default config.toml");
                        Ok(config)
                    }
                    Err(e) => {
                        error!("[CONFIG] Unable to serialize default configuration: {e}");
                        Err(error)
                    }
                }
            }
        }
    }
}
