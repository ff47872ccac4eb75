//! Records returned by the car search endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A car as indexed by the backend.
///
/// Every field is optional and unknown fields are collected in `extra`, so
/// decoding never rejects a record the backend chose to return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Records of one search call together with the response metadata
#[derive(Debug, Clone)]
pub struct SearchResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Records in the order the backend returned them
    pub records: Vec<T>,
}

impl<T> SearchResponse<T> {
    /// Look up a header by name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_car_keeps_unknown_fields() {
        let car: Car = serde_json::from_value(json!({
            "id": 1,
            "make": "AAAAAAAAAA",
            "model": "AAAAAAAAAA",
            "price": 1,
            "color": "red"
        }))
        .unwrap();

        assert_eq!(car.id, Some(1));
        assert_eq!(car.make.as_deref(), Some("AAAAAAAAAA"));
        assert_eq!(car.price, Some(1));
        assert_eq!(car.extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_car_partial_record() {
        let car: Car = serde_json::from_value(json!({ "id": 2 })).unwrap();
        assert_eq!(car.id, Some(2));
        assert!(car.make.is_none());
        assert_eq!(serde_json::to_value(&car).unwrap(), json!({ "id": 2 }));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-total-count".to_string(), "3".to_string());
        let response: SearchResponse<Car> = SearchResponse {
            status: 200,
            headers,
            records: Vec::new(),
        };
        assert_eq!(response.header("X-Total-Count"), Some("3"));
        assert!(response.is_empty());
    }
}
