//! Default request headers

/// User agent identifying this client
pub fn default_user_agent() -> String {
    format!("car-search/{}", crate::VERSION)
}

/// Accept header for JSON endpoints
pub fn accept_json() -> &'static str {
    "application/json, text/plain, */*"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let ua = default_user_agent();
        assert!(ua.starts_with("car-search/"));
        assert!(ua.ends_with(crate::VERSION));
    }
}
