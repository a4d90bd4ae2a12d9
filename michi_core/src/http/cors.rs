use http::HeaderMap;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, HeaderValue, ORIGIN, REFERER,
};
use serde::{Deserialize, Serialize};

use crate::debug_log;

/// CORS configuration: the origins allowed to reach an endpoint.
///
/// Origins are compared by prefix against the request's `Origin` header
/// (falling back to `Referer`), with any trailing `/` on the configured
/// value ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    pub fn new<I, T>(origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Load settings from a JSON document, e.g. an app config block.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        debug_log!("CORS settings loaded: {:?}", settings.allowed_origins);
        Ok(settings)
    }

    /// Combine app-level settings with endpoint-level ones. Origins are
    /// concatenated, endpoint origins last.
    pub fn merge(&self, other: &CorsSettings) -> CorsSettings {
        let mut allowed_origins = self.allowed_origins.clone();
        allowed_origins.extend(other.allowed_origins.iter().cloned());
        CorsSettings { allowed_origins }
    }

    /// Pick the configured origin to echo back for this request, if any.
    ///
    /// Reads `Origin`, falling back to `Referer`; returns the first
    /// configured origin (trailing `/` stripped) the header starts with.
    pub fn allow_origin(&self, request: &HeaderMap) -> Option<String> {
        let header = request
            .get(ORIGIN)
            .or_else(|| request.get(REFERER))?
            .to_str()
            .ok()?;
        self.allowed_origins
            .iter()
            .map(|origin| origin.strip_suffix('/').unwrap_or(origin))
            .find(|origin| header.starts_with(origin))
            .map(str::to_string)
    }

    /// Set `Access-Control-Allow-Origin` on the response when the request's
    /// origin is allowed. Returns whether the header was written.
    pub fn enable(&self, request: &HeaderMap, response: &mut HeaderMap) -> bool {
        match self
            .allow_origin(request)
            .and_then(|origin| HeaderValue::from_str(&origin).ok())
        {
            Some(value) => {
                response.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
                true
            }
            None => false,
        }
    }
}

/// Echo a preflight request's CORS headers onto the response:
/// `Access-Control-Request-Headers` becomes `Access-Control-Allow-Headers`
/// and `Access-Control-Request-Method` becomes `Access-Control-Allow-Methods`.
pub fn echo_preflight(request: &HeaderMap, response: &mut HeaderMap) {
    if let Some(value) = request.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        response.insert(ACCESS_CONTROL_ALLOW_HEADERS, value.clone());
    }
    if let Some(value) = request.get(ACCESS_CONTROL_REQUEST_METHOD) {
        response.insert(ACCESS_CONTROL_ALLOW_METHODS, value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                http::header::HeaderName::from_static(name),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn preflight_headers_are_echoed() {
        let request = headers(&[
            ("access-control-request-headers", "x-custom"),
            ("access-control-request-method", "PUT"),
        ]);
        let mut response = HeaderMap::new();
        echo_preflight(&request, &mut response);
        assert_eq!(response[ACCESS_CONTROL_ALLOW_HEADERS], "x-custom");
        assert_eq!(response[ACCESS_CONTROL_ALLOW_METHODS], "PUT");
    }

    #[test]
    fn preflight_echo_skips_absent_headers() {
        let request = headers(&[("access-control-request-method", "DELETE")]);
        let mut response = HeaderMap::new();
        echo_preflight(&request, &mut response);
        assert!(response.get(ACCESS_CONTROL_ALLOW_HEADERS).is_none());
        assert_eq!(response[ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    }

    #[test]
    fn origin_must_be_configured() {
        let settings = CorsSettings::new(["https://example.com"]);
        let allowed = headers(&[("origin", "https://example.com")]);
        let denied = headers(&[("origin", "https://evil.example")]);
        assert_eq!(
            settings.allow_origin(&allowed),
            Some("https://example.com".to_string())
        );
        assert_eq!(settings.allow_origin(&denied), None);
    }

    #[test]
    fn configured_trailing_slash_is_ignored() {
        let settings = CorsSettings::new(["https://example.com/"]);
        let request = headers(&[("origin", "https://example.com")]);
        assert_eq!(
            settings.allow_origin(&request),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn referer_is_the_fallback() {
        let settings = CorsSettings::new(["https://example.com"]);
        let request = headers(&[("referer", "https://example.com/page")]);
        assert_eq!(
            settings.allow_origin(&request),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn no_origin_or_referer_means_no_allowance() {
        let settings = CorsSettings::new(["https://example.com"]);
        assert_eq!(settings.allow_origin(&HeaderMap::new()), None);
    }

    #[test]
    fn enable_writes_the_allow_origin_header() {
        let settings = CorsSettings::new(["https://example.com"]);
        let request = headers(&[("origin", "https://example.com")]);
        let mut response = HeaderMap::new();
        assert!(settings.enable(&request, &mut response));
        assert_eq!(response[ACCESS_CONTROL_ALLOW_ORIGIN], "https://example.com");

        let mut untouched = HeaderMap::new();
        assert!(!settings.enable(&HeaderMap::new(), &mut untouched));
        assert!(untouched.is_empty());
    }

    #[test]
    fn merge_concatenates_origins() {
        let app = CorsSettings::new(["https://a.example"]);
        let endpoint = CorsSettings::new(["https://b.example"]);
        let merged = app.merge(&endpoint);
        assert_eq!(merged.allowed_origins, ["https://a.example", "https://b.example"]);
    }

    #[test]
    fn settings_load_from_json() {
        let settings =
            CorsSettings::from_json(r#"{"allowed_origins": ["https://example.com"]}"#).unwrap();
        assert_eq!(settings, CorsSettings::new(["https://example.com"]));
        assert!(CorsSettings::from_json("not json").is_err());
    }
}
