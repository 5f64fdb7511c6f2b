pub mod probe_type;
