//! HTTP networking module
//!
//! Provides the transport trait and the reqwest-backed client that
//! executes resource requests against the gateway.

mod client;
mod headers;
mod transport;

pub use client::HttpClient;
pub use headers::{accept_json, default_user_agent};
pub use transport::{ResourceRequest, ResourceResponse, Transport};
