use crate::errors::BeetleError;
use crate::source::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Could not load type listing: {source}")]
    Fetch {
        #[from]
        source: FetchError,
    },

    #[error("No {collection} collection published by the server (available: {available})")]
    MissingCollection {
        collection: String,
        available: String,
    },
}

impl BeetleError for BootstrapError {
    fn error_code(&self) -> &'static str {
        match self {
            BootstrapError::Fetch { .. } => "BOOTSTRAP_FETCH_FAILED",
            BootstrapError::MissingCollection { .. } => "BOOTSTRAP_MISSING_COLLECTION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, BootstrapError::MissingCollection { .. })
    }
}
