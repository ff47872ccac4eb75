//! Builder for car search parameters

use crate::resource::Params;
use std::fmt;

/// Name of the path placeholder holding the record identifier
pub const ID_PARAM: &str = "id";

/// Sort direction understood by the backend's `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one search call.
///
/// `id` fills the path placeholder; every other parameter is sent in the
/// query string.
///
/// ```
/// use car_search::search::{SearchParams, SortDirection};
///
/// let params = SearchParams::new()
///     .query("make:Ford")
///     .page(0)
///     .size(20)
///     .sort("price", SortDirection::Desc);
/// assert_eq!(params.as_params().first("sort"), Some("price,desc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: Params,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier substituted into the path
    pub fn id(mut self, id: impl fmt::Display) -> Self {
        self.params.set(ID_PARAM, id.to_string());
        self
    }

    /// Search-engine query string, e.g. `make:Ford AND price:[* TO 20000]`
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.params.set("query", query);
        self
    }

    /// Zero-based page index
    pub fn page(mut self, page: u32) -> Self {
        self.params.set("page", page.to_string());
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.params.set("size", size.to_string());
        self
    }

    /// Add a sort criterion; criteria apply in the order they are added
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.params
            .append("sort", format!("{},{}", field.into(), direction));
        self
    }

    /// Set an arbitrary parameter, replacing earlier values
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Add a value to an arbitrary parameter
    pub fn append(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.append(key, value);
        self
    }

    pub fn as_params(&self) -> &Params {
        &self.params
    }
}

impl From<SearchParams> for Params {
    fn from(search: SearchParams) -> Self {
        search.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let params: Params = SearchParams::new()
            .id(42)
            .query("make:Ford")
            .page(1)
            .size(20)
            .sort("price", SortDirection::Asc)
            .sort("id", SortDirection::Desc)
            .into();

        assert_eq!(params.first("id"), Some("42"));
        assert_eq!(params.first("query"), Some("make:Ford"));
        assert_eq!(params.first("page"), Some("1"));
        assert_eq!(params.first("size"), Some("20"));
        assert_eq!(params.get("sort").unwrap(), ["price,asc", "id,desc"]);
    }

    #[test]
    fn test_empty_by_default() {
        assert!(SearchParams::new().as_params().is_empty());
    }
}
