//! HttpBackend struct and request construction.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::RagError;

use super::config::BackendConfig;

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Retrieval backend reached over HTTP.
pub struct HttpBackend {
    pub(crate) config: BackendConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) headers: HeaderMap,
}

impl HttpBackend {
    /// Fails when the client cannot be built or the API key is not a valid
    /// header value, so a bad key surfaces at startup instead of mid-turn.
    pub fn new(config: BackendConfig) -> Result<Self, RagError> {
        let headers = request_headers(&config)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RagError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            http,
            headers,
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

/// Headers sent with every request.
fn request_headers(config: &BackendConfig) -> Result<HeaderMap, RagError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(ref key) = config.api_key {
        let mut value = HeaderValue::from_str(key).map_err(|_| {
            RagError::Configuration("API key contains characters not allowed in a header".into())
        })?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    }
    Ok(headers)
}

/// Map a reqwest failure onto the transport error kinds.
pub(crate) fn transport_error(e: reqwest::Error) -> RagError {
    if e.is_timeout() {
        RagError::Timeout(e.to_string())
    } else {
        RagError::Network(e.to_string())
    }
}
