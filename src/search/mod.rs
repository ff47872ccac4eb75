//! Car search accessor
//!
//! [`CarSearch`] binds the gateway's search endpoint to a single `query`
//! operation. Records come back as the backend sent them, either as raw
//! JSON values or decoded into a caller-chosen type such as [`Car`].

mod client;
mod models;
mod params;

pub use client::{CarSearch, CAR_SEARCH_PATH, DEFAULT_SERVICE_PREFIX, QUERY};
pub use models::{Car, SearchResponse};
pub use params::{SearchParams, SortDirection, ID_PARAM};
