//! Service identity data model.
//!
//! # Responsibilities
//! - Hold the immutable name/version pair the service advertises
//! - Derive the versioned base path and the human-readable descriptor
//! - Produce the greeting embedded in the root response
//!
//! # Design Decisions
//! - Constructed once at startup from validated config, shared via Arc
//! - No mutation after construction, so handlers need no synchronization
//! - Derivations are plain string interpolation; no versioning scheme beyond
//!   the version string itself

use crate::config::ServiceConfig;

/// Immutable identity of this service instance.
///
/// Lives for the whole process: built during startup, handed to the HTTP
/// layer, dropped at exit.
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    /// Service name (e.g. "sub").
    pub name: String,
    /// Version string (e.g. "v1").
    pub version: String,
    /// Advertised API mount prefix, "/api/" + version.
    pub base_path: String,
    /// Human-readable descriptor, "name: <name>, version: <version>".
    pub descriptor: String,
}

impl ServiceIdentity {
    /// Build the identity and its derived strings.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let version = version.into();
        let base_path = format!("/api/{}", version);
        let descriptor = format!("name: {}, version: {}", name, version);
        Self {
            name,
            version,
            base_path,
            descriptor,
        }
    }

    /// Build the identity from the service section of the config.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.name, &config.version)
    }

    /// The welcome message returned by the root handler.
    pub fn greeting(&self) -> String {
        format!("welcome all : {}", self.descriptor)
    }
}
