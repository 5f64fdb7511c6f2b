pub mod probe_session;
pub mod probe_type;
pub mod session_sink;
