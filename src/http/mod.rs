//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware wiring)
//!     → request.rs (attach request ID)
//!     → handlers.rs (the single greeting handler)
//!     → response.rs (serialized greeting payload)
//!     → Send to client
//! ```
//!
//! Unknown paths and non-GET methods never reach service code; the framework
//! answers 404/405 on its own.

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::Greeting;
pub use server::HttpServer;
