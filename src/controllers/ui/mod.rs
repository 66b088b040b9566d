pub mod controller;
pub mod elements;
pub mod errors;
pub mod ports;
