pub mod errors;
pub mod expiry;
pub mod models;
pub mod ports;
pub mod service;
