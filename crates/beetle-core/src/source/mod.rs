//! Remote collections and the clients that fetch them.

pub mod errors;
pub mod http;

use std::future::Future;

pub use errors::FetchError;
pub use http::{HttpSource, build_client, collection_url};

/// A remote collection that can be fetched as a whole.
///
/// The refresh loop is generic over this trait so tests can substitute
/// scripted sources for the HTTP client.
pub trait RecordSource {
    type Record;

    /// Fetch every record of the collection.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Self::Record>, FetchError>> + Send;

    /// Where the collection lives, for logs and error messages.
    fn location(&self) -> &str;
}
