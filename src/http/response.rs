//! Response payload for the greeting endpoint.
//!
//! The wire shape is a single-key JSON object:
//! `{"world":"welcome all : name: sub, version: v1"}`

use serde::{Deserialize, Serialize};

use crate::identity::ServiceIdentity;

/// Body of the root response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Welcome message carrying the service descriptor verbatim.
    pub world: String,
}

impl Greeting {
    /// Build the greeting for the given identity.
    pub fn for_identity(identity: &ServiceIdentity) -> Self {
        Self {
            world: identity.greeting(),
        }
    }
}
