//! Versioned greeting microservice library.

pub mod config;
pub mod http;
pub mod identity;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use identity::ServiceIdentity;
pub use lifecycle::Shutdown;
