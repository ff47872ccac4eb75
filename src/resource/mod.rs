//! Resource binding
//!
//! Maps a URL template plus an HTTP verb onto a callable action. A
//! [`Resource`] owns the template and the transport; an [`Action`] says
//! which verb to use and which JSON shape the response must have.

mod params;
mod template;

pub use params::Params;
pub use template::{encode_uri_segment, ExpandedPath, ResourceTemplate};

use crate::error::{Result, SearchError};
use crate::network::{ResourceRequest, Transport};
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// A named verb bound to a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub method: Method,
    /// The response body must be a JSON array
    pub is_array: bool,
}

impl Action {
    pub const fn new(name: &'static str, method: Method, is_array: bool) -> Self {
        Self {
            name,
            method,
            is_array,
        }
    }
}

/// Decoded JSON body of a successful action together with its metadata
#[derive(Debug, Clone)]
pub struct ActionResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

/// A URL template rooted at a base URL and backed by a transport
#[derive(Clone)]
pub struct Resource {
    base: Url,
    template: ResourceTemplate,
    transport: Arc<dyn Transport>,
}

impl Resource {
    pub fn new(
        base_url: &str,
        template: ResourceTemplate,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            base: directory_url(base_url)?,
            template,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn template(&self) -> &ResourceTemplate {
        &self.template
    }

    /// Build the request `action` would send for `params`
    pub fn request(&self, action: &Action, params: &Params) -> Result<ResourceRequest> {
        let expanded = self.template.expand(params);
        let mut url = self.base.join(&expanded.path)?;

        if !expanded.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &expanded.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(ResourceRequest::new(action.name, action.method.clone(), url))
    }

    /// Send one request for `action` and decode the JSON body.
    ///
    /// Failures are returned as-is; there is no retry.
    pub async fn invoke(&self, action: &Action, params: &Params) -> Result<ActionResponse> {
        let request = self.request(action, params)?;
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(SearchError::Status {
                status: response.status,
                body: response.text,
            });
        }

        let body: Value = if action.is_array && response.text.trim().is_empty() {
            Value::Array(Vec::new())
        } else {
            response.json()?
        };

        // A falsy body leaves an array action with an empty list
        let body = if action.is_array && is_falsy(&body) {
            Value::Array(Vec::new())
        } else {
            body
        };

        if action.is_array && !body.is_array() {
            return Err(SearchError::UnexpectedShape {
                action: action.name,
                expected: "an array",
                found: describe(&body),
            });
        }

        debug!(
            action = action.name,
            status = response.status,
            records = ?body.as_array().map(Vec::len),
            "received response"
        );

        Ok(ActionResponse {
            status: response.status,
            headers: response.headers,
            body,
        })
    }
}

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("base", &self.base.as_str())
            .field("template", &self.template.as_str())
            .finish()
    }
}

/// Parse `base_url`, making sure relative paths resolve beneath it
fn directory_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
