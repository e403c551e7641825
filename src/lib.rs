pub mod config;
pub mod server;
pub mod spectra_db;
pub mod utils;
