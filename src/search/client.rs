//! Accessor for the car search endpoint

use super::models::SearchResponse;
use super::params::ID_PARAM;
use crate::config::ClientSettings;
use crate::error::{Result, SearchError};
use crate::network::{ResourceRequest, Transport};
use crate::resource::{Action, Params, Resource, ResourceTemplate};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Path of the search endpoint below the service prefix
pub const CAR_SEARCH_PATH: &str = "api/_search/cars/:id";

/// Gateway route of the microservice owning the car index
pub const DEFAULT_SERVICE_PREFIX: &str = "blogapp/";

/// The only action of the search resource: GET, answered with an array
pub const QUERY: Action = Action::new("query", Method::GET, true);

/// Client for `GET <base>/blogapp/api/_search/cars/:id`.
///
/// Construct it once at startup and hand clones to whatever needs it; it
/// holds no mutable state and every call is independent.
#[derive(Debug, Clone)]
pub struct CarSearch {
    resource: Resource,
}

impl CarSearch {
    /// Bind the default search path under `base_url`
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let template =
            ResourceTemplate::new(format!("{}{}", DEFAULT_SERVICE_PREFIX, CAR_SEARCH_PATH));
        Self::with_template(base_url, template, transport)
    }

    /// Bind the path described by `settings`
    pub fn from_settings(settings: &ClientSettings, transport: Arc<dyn Transport>) -> Result<Self> {
        let template = ResourceTemplate::new(settings.template())
            .strip_trailing_slashes(settings.strip_trailing_slashes);
        Self::with_template(&settings.base_url, template, transport)
    }

    /// Bind a custom template; it must contain exactly one `:id` placeholder
    pub fn with_template(
        base_url: &str,
        template: ResourceTemplate,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let placeholders = template.placeholders();
        if placeholders.len() != 1 || placeholders[0] != ID_PARAM {
            return Err(SearchError::InvalidTemplate(format!(
                "`{}` must contain exactly one `:{}` placeholder",
                template.as_str(),
                ID_PARAM
            )));
        }

        Ok(Self {
            resource: Resource::new(base_url, template, transport)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.resource.base_url()
    }

    pub fn template(&self) -> &ResourceTemplate {
        self.resource.template()
    }

    /// The request `query` would send for `params`, without sending it
    pub fn request(&self, params: impl Into<Params>) -> Result<ResourceRequest> {
        self.resource.request(&QUERY, &params.into())
    }

    /// Run the search and return the records untouched
    pub async fn query(&self, params: impl Into<Params>) -> Result<Vec<Value>> {
        Ok(self.fetch(params).await?.records)
    }

    /// Run the search and decode each record as `T`
    pub async fn query_as<T: DeserializeOwned>(
        &self,
        params: impl Into<Params>,
    ) -> Result<Vec<T>> {
        Ok(self.fetch_as(params).await?.records)
    }

    /// Run the search, keeping status and headers alongside the records
    pub async fn fetch(&self, params: impl Into<Params>) -> Result<SearchResponse<Value>> {
        self.fetch_as(params).await
    }

    pub async fn fetch_as<T: DeserializeOwned>(
        &self,
        params: impl Into<Params>,
    ) -> Result<SearchResponse<T>> {
        let params = params.into();
        let response = self.resource.invoke(&QUERY, &params).await?;
        let records: Vec<T> = serde_json::from_value(response.body)?;

        Ok(SearchResponse {
            status: response.status,
            headers: response.headers,
            records,
        })
    }
}
