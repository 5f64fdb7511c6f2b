pub mod probe_registry;
