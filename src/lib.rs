//! car-search: async client for the car search endpoint of the blog gateway
//!
//! The gateway exposes `GET <base>/blogapp/api/_search/cars/:id`, answering
//! with a JSON array of records. [`CarSearch`] binds that endpoint to a single
//! `query` call and returns the records as they came.
//!
//! ```no_run
//! use car_search::{CarSearch, HttpClient, SearchParams};
//! use std::sync::Arc;
//!
//! # async fn run() -> car_search::Result<()> {
//! let search = CarSearch::new("http://localhost:8080/", Arc::new(HttpClient::new()?))?;
//! let records = search.query(SearchParams::new().query("make:Ford")).await?;
//! println!("{} cars", records.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod resource;
pub mod search;

pub use config::Settings;
pub use error::{Result, SearchError};
pub use network::{HttpClient, Transport};
pub use resource::Params;
pub use search::{Car, CarSearch, SearchParams, SearchResponse, SortDirection};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for search requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

/// Maximum timeout that can be set
pub const MAX_TIMEOUT: u64 = 60;
