pub mod data;
pub mod envelope;
pub mod modules;
pub mod ports;
