pub mod announce_request;
pub mod announce_response;
pub mod connect_request;
pub mod connect_response;
pub mod connection_id;
pub mod peer_id;
pub mod tracker_server;
pub mod transaction_id;
