pub mod config;
pub mod currency;
pub mod payment;
pub mod ports;
