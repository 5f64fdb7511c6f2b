use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use async_std::task;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use leakprobe::common::common::{setup_logging, udp_check_host_and_port_used};
use leakprobe::config::structs::configuration::Configuration;
use leakprobe::dns::dns::dns_service;
use leakprobe::probe::structs::probe_service::ProbeService;
use leakprobe::structs::Cli;
use leakprobe::tracker::tracker::tracker_service;
use leakprobe::websocket::websocket::websocket_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = Arc::new(ProbeService::new(config.clone()));
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let (udp_tx, udp_rx) = tokio::sync::watch::channel(false);
            let mut listener_futures = Vec::new();

            udp_check_host_and_port_used(config.tracker_probe.bind_address.clone());
            let tracker_addr: SocketAddr = config.tracker_probe.bind_address.parse().expect("Invalid tracker_probe.bind_address");
            listener_futures.push(tracker_service(tracker_addr, service.clone(), udp_rx.clone()).await);

            udp_check_host_and_port_used(config.dns_probe.bind_address.clone());
            let dns_addr: SocketAddr = config.dns_probe.bind_address.parse().expect("Invalid dns_probe.bind_address");
            listener_futures.push(dns_service(dns_addr, service.clone(), udp_rx.clone()).await);

            let cleanup_handler = tokio_shutdown.clone();
            let service_cleanup = service.clone();
            let cleanup_interval = config.registry_cleanup_interval;
            info!("[BOOT] Starting thread for registry cleanup with {cleanup_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let dns_removed = service_cleanup.dns_registry.clean_expired();
                            let tracker_removed = service_cleanup.tracker_registry.clean_expired();
                            if dns_removed + tracker_removed > 0 {
                                info!("[REGISTRY] Expired {dns_removed} DNS and {tracker_removed} tracker tokens");
                            }
                        }
                        _ = cleanup_handler.handle() => {
                            info!("[BOOT] Shutting down thread for registry cleanup...");
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let service_stats = service.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = service_stats.get_stats();

                            info!(
                                "[STATS] Sessions: {} active - {} closed | Forwarded: {} | Tokens: DNS {} - Tracker {}",
                                stats.sessions_opened - stats.sessions_closed, stats.sessions_closed,
                                stats.addresses_forwarded,
                                service_stats.dns_registry.len(), service_stats.tracker_registry.len()
                            );

                            info!(
                                "[STATS UDP] IPv4: Conn:{} A:{} Bad:{} | IPv6: Conn:{} A:{} Bad:{} | Hits:{}",
                                stats.udp4_connections_handled, stats.udp4_announces_handled, stats.udp4_bad_request,
                                stats.udp6_connections_handled, stats.udp6_announces_handled, stats.udp6_bad_request,
                                stats.tracker_tokens_matched
                            );

                            info!(
                                "[STATS DNS] Queries:{} Bad:{} Hits:{}",
                                stats.dns_queries_handled, stats.dns_bad_request, stats.dns_tokens_matched
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let ws_addr: SocketAddr = config.websocket_server.bind_address.parse().expect("Invalid websocket_server.bind_address");
            let (ws_handle, ws_future) = websocket_service(ws_addr, service.clone()).await;

            tokio::spawn(async move {
                let _ = ws_future.await;
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = udp_tx.send(true);

                    match try_join_all(listener_futures).await {
                        Ok(_) => {}
                        Err(error) => {
                            error!("Errors happened on shutting down UDP listeners: {error}");
                        }
                    }

                    ws_handle.stop(true).await;
                    tokio_shutdown.handle().await;
                    task::sleep(Duration::from_secs(1)).await;

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
