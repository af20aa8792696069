//! One-time schema check that precedes the first refresh cycle.
//!
//! The server publishes the names of its collections at `types_path`.
//! Polling only makes sense when both the device collection and the strip
//! collection are among them.

pub mod errors;

use serde::Deserialize;
use tracing::{error, info};

pub use errors::BootstrapError;

use crate::config::ServerConfig;
use crate::source::collection_url;
use crate::source::http::get_json;

/// Entry of the type listing; plain names and `{"name": ...}` objects are both accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TypeEntry {
    Name(String),
    Described { name: String },
}

impl TypeEntry {
    fn into_name(self) -> String {
        match self {
            TypeEntry::Name(name) | TypeEntry::Described { name } => name,
        }
    }
}

/// Collection names the server reported during bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeListing {
    pub names: Vec<String>,
}

impl TypeListing {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Check that both collections the refresh loop polls are present.
    pub fn require(&self, server: &ServerConfig) -> Result<(), BootstrapError> {
        for collection in [server.device_collection(), server.strip_collection()] {
            if !self.contains(collection) {
                return Err(BootstrapError::MissingCollection {
                    collection: collection.to_string(),
                    available: if self.names.is_empty() {
                        "none".to_string()
                    } else {
                        self.names.join(", ")
                    },
                });
            }
        }
        Ok(())
    }
}

/// Fetch the type listing and verify the polled collections exist.
pub async fn load_types(
    client: &reqwest::Client,
    server: &ServerConfig,
) -> Result<TypeListing, BootstrapError> {
    let url = collection_url(server.base_url(), server.types_path());
    info!(event = "core.bootstrap.types_load_started", url = %url);

    let entries: Vec<TypeEntry> = get_json(client, &url).await.inspect_err(|e| {
        error!(event = "core.bootstrap.types_load_failed", url = %url, error = %e);
    })?;

    let listing = TypeListing {
        names: entries.into_iter().map(TypeEntry::into_name).collect(),
    };

    if let Err(e) = listing.require(server) {
        error!(event = "core.bootstrap.collection_missing", error = %e);
        return Err(e);
    }

    info!(
        event = "core.bootstrap.types_load_completed",
        count = listing.names.len()
    );
    Ok(listing)
}
