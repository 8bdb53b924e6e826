//! In-process event registry with a shared key/value state store.
//!
//! Independently initialised modules of one application use a single
//! [`Registry`] to exchange named notifications and to read and write a small
//! bag of shared data. Delivery is synchronous and isolates failing handlers;
//! every write through [`Registry::set_value`] is announced with a
//! `data-changed` event.
//!
//! ```
//! use std::sync::Arc;
//!
//! use pagebus::{events, AppEvent, Registry};
//! use serde_json::json;
//!
//! let registry = Arc::new(Registry::new());
//! registry.subscribe_event(AppEvent::UserLoggedIn, |user| {
//!     assert_eq!(user["name"], "Alice");
//!     Ok(())
//! });
//! registry.subscribe(events::DATA_CHANGED, |change| {
//!     assert_eq!(change["key"], "user");
//!     Ok(())
//! });
//!
//! registry.set_value("user", json!({ "name": "Alice" }));
//! registry.publish_event(AppEvent::UserLoggedIn, &json!({ "name": "Alice" }));
//! ```

/// Event name catalog and seeded shared-data keys.
pub mod catalog;
/// Settings loading (defaults + `PAGEBUS_*` environment).
pub mod config;
/// Crate-level error type and re-exports from `pagebus-error`.
pub mod error;
/// Process-wide registry cell.
pub mod global;
/// Logging initialisation (formatting, filters, sinks).
pub mod logging;
/// Typed payloads and seed data.
pub mod payload;
/// The registry: subscriptions, dispatch, shared store.
pub mod registry;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

pub use catalog::{events, keys, AppEvent, EventGroup};
pub use crate::config::Settings;
pub use error::{ConfigError, Error, HandlerError, PayloadError, RegistryError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingHandle};
pub use payload::{DataChanged, SeedData, UserIdentity};
pub use registry::{DispatchStats, Handler, Registry, SharedRegistry};
