//! Transport seam between resource actions and the HTTP stack

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use std::collections::HashMap;
use url::Url;

/// A fully resolved request produced by a resource action
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    /// Name of the action that produced the request
    pub action: &'static str,
    pub method: Method,
    /// Absolute URL, query string included
    pub url: Url,
}

impl ResourceRequest {
    pub fn new(action: &'static str, method: Method, url: Url) -> Self {
        Self {
            action,
            method,
            url,
        }
    }
}

/// Raw HTTP response as seen by a resource action
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
}

impl ResourceResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// Executes resource requests.
///
/// Non-2xx statuses are returned as responses, not errors; classifying them
/// is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ResourceRequest) -> Result<ResourceResponse>;
}
