// quickhab-api: Async Rust client for the openHAB REST API

pub mod client;
pub mod error;
pub mod items;
pub mod models;
pub mod transport;

pub use client::{Method, RestClient};
pub use error::Error;
pub use models::{RemoteItem, RemoteMetadata};
pub use transport::TransportConfig;
