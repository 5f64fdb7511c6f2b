pub mod info_hash;
pub mod probe_service;
