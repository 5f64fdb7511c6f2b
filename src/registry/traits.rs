pub mod address_sink;
