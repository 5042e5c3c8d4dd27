//! # Zumo Client
//!
//! REST client for the `tables/` endpoints of an Azure Mobile Services
//! application.
//!
//! One [`TableClient`] holds the immutable service address and two optional
//! static keys (`X-ZUMO-APPLICATION`, `X-ZUMO-MASTER`) and exposes the four
//! table operations: insert, delete, update, query. Each call performs
//! exactly one HTTP round trip; there is no retry, caching, or session state.
//!
//! ## Example
//! ```no_run
//! use zumo_client::{TableClient, TableClientConfig};
//!
//! # async fn run() -> Result<(), zumo_client::ClientError> {
//! let config = TableClientConfig::builder("https://myapp.azure-mobile.net")
//!     .application_key("app-key")
//!     .build()?;
//! let client = TableClient::new(config)?;
//!
//! let rows = client.query("todoitem", Some("$top=5"), false).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod outcome;

// Re-export commonly used items
pub use client::{TableClient, TableOperations};
pub use config::{TableClientConfig, TableClientConfigBuilder};
pub use entity::EntityData;
pub use error::{ClientError, Result};
pub use outcome::{InsertOutcome, QueryOutcome};
