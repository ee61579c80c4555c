//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the TCP listener from validated config
//! - Surface bind failures (port taken, permission denied) as fatal errors
//!
//! # Design Decisions
//! - Fail fast: any startup error propagates out of main, process exits
//!   non-zero with the error on stderr
//! - Traffic is only accepted after the listener is bound and logged

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, ListenerConfig};

/// Fatal error during service startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Bind the listener described by the config.
///
/// Binding an address that is already in use fails here, before any request
/// is accepted.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| StartupError::InvalidAddress {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_on_free_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".to_string(),
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_bind_on_taken_port_fails() {
        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ListenerConfig {
            bind_address: first.local_addr().unwrap().to_string(),
        };
        let err = bind_listener(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }

    #[tokio::test]
    async fn test_unparseable_address_fails() {
        let config = ListenerConfig {
            bind_address: "localhost:http".to_string(),
        };
        let err = bind_listener(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidAddress { .. }));
    }
}
