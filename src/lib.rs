pub mod chat;
pub mod config;
pub mod intent;
pub mod keepalive;
pub mod monitor;
pub mod routes;
pub mod types;
