//! beetle-core: polling client for light strip device servers
//!
//! This library keeps typed copies of a device server's two collections
//! (the device-state singleton and the light strip records) up to date.
//! It is used by the `beetle` CLI.
//!
//! # Main Entry Points
//!
//! - [`refresh`] - The refresh loop and its backoff policy
//! - [`bootstrap`] - One-time check of the server's type listing
//! - [`source`] - HTTP collection clients
//! - [`records`] - In-memory record sets with change detection
//! - [`config`] - Configuration management

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod models;
pub mod records;
pub mod refresh;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use bootstrap::{BootstrapError, TypeListing};
pub use config::BeetleConfig;
pub use errors::{BeetleError, ConfigError};
pub use events::{Event, Observer};
pub use models::{DeviceField, DeviceState, HtmlColor, StripRecord};
pub use records::{DeviceSlot, RecordsView, StripChanges, StripSet};
pub use refresh::{Backoff, CycleReport, HttpRefreshLoop, LoopExit, RefreshLoop, SuspendHandle};
pub use source::{FetchError, HttpSource, RecordSource};

// Re-export logging initialization
pub use logging::init_logging;
