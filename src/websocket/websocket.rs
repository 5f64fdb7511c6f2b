use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web_actors::ws;
use log::{debug, error, info};
use crate::probe::structs::probe_service::ProbeService;
use crate::websocket::enums::probe_type::ProbeType;
use crate::websocket::structs::probe_session::ProbeSession;
use crate::websocket::structs::websocket_service_data::WebsocketServiceData;

/// Probes issued per DNS session. Several independent lookups make the
/// test robust against resolvers that only leak on some query paths.
pub const DNS_PROBE_TOKENS: usize = 6;

fn origin_allowed(req: &HttpRequest, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match req.headers().get(header::ORIGIN).and_then(|value| value.to_str().ok()) {
        Some(origin) => allowed.iter().any(|candidate| candidate == origin),
        None => false,
    }
}

async fn probe_handler(
    probe_type: ProbeType,
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<Arc<WebsocketServiceData>>,
) -> Result<HttpResponse, Error> {
    if !origin_allowed(&req, &data.config.websocket_server.allowed_origins) {
        debug!("[WEBSOCKET] Rejecting upgrade with disallowed origin from {:?}", req.peer_addr());
        return Ok(HttpResponse::Forbidden().finish());
    }
    let session = ProbeSession::new(data.get_ref().clone(), probe_type);
    ws::start(session, &req, stream)
}

async fn dns_probe_handler(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<Arc<WebsocketServiceData>>,
) -> Result<HttpResponse, Error> {
    probe_handler(ProbeType::Dns, req, stream, data).await
}

async fn bittorrent_probe_handler(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<Arc<WebsocketServiceData>>,
) -> Result<HttpResponse, Error> {
    probe_handler(ProbeType::Bittorrent, req, stream, data).await
}

pub async fn websocket_service(
    addr: SocketAddr,
    service: Arc<ProbeService>,
) -> (ServerHandle, impl Future<Output = Result<(), std::io::Error>>) {
    let config = service.config.clone();
    let keep_alive = config.websocket_server.keep_alive;
    let request_timeout = config.websocket_server.request_timeout;
    let disconnect_timeout = config.websocket_server.disconnect_timeout;
    let worker_threads = config.websocket_server.threads as usize;
    let max_connections = config.websocket_server.max_connections;

    let service_data = Arc::new(WebsocketServiceData {
        service: service.clone(),
        config: config.clone(),
    });

    if config.websocket_server.ssl {
        info!("[WEBSOCKET] Starting WSS server on {}", addr);

        let ssl_key = &config.websocket_server.ssl_key;
        let ssl_cert = &config.websocket_server.ssl_cert;

        if ssl_key.is_empty() || ssl_cert.is_empty() {
            error!("[WEBSOCKET] No SSL key or SSL certificate given, exiting...");
            exit(1);
        }

        let key_file = &mut BufReader::new(match File::open(ssl_key) {
            Ok(data) => data,
            Err(e) => panic!("[WEBSOCKET] SSL key unreadable: {}", e),
        });

        let certs_file = &mut BufReader::new(match File::open(ssl_cert) {
            Ok(data) => data,
            Err(e) => panic!("[WEBSOCKET] SSL cert unreadable: {}", e),
        });

        let tls_certs = match rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>() {
            Ok(data) => data,
            Err(e) => panic!("[WEBSOCKET] SSL cert couldn't be extracted: {}", e),
        };

        let tls_key = match rustls_pemfile::pkcs8_private_keys(key_file).next().unwrap() {
            Ok(data) => data,
            Err(e) => panic!("[WEBSOCKET] SSL key couldn't be extracted: {}", e),
        };

        let tls_config = match rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
        {
            Ok(data) => data,
            Err(e) => panic!("[WEBSOCKET] SSL config couldn't be created: {}", e),
        };

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(service_data.clone()))
                .route("/v1/dns", web::get().to(dns_probe_handler))
                .route("/v1/bittorrent", web::get().to(bittorrent_probe_handler))
        })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads)
        .max_connections(max_connections)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
        .unwrap()
        .disable_signals()
        .run();

        return (server.handle(), server);
    }

    info!("[WEBSOCKET] Starting WS server on {}", addr);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service_data.clone()))
            .route("/v1/dns", web::get().to(dns_probe_handler))
            .route("/v1/bittorrent", web::get().to(bittorrent_probe_handler))
    })
    .keep_alive(Duration::from_secs(keep_alive))
    .client_request_timeout(Duration::from_secs(request_timeout))
    .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
    .workers(worker_threads)
    .max_connections(max_connections)
    .bind((addr.ip(), addr.port()))
    .unwrap()
    .disable_signals()
    .run();

    (server.handle(), server)
}
