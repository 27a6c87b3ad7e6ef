//! Client configuration.

use reqwest::header::HeaderMap;

/// Default base URL for the single-email API endpoints.
pub const API_HOST: &str = "https://api.zerobounce.net";

/// Default base URL for the batch and bulk-file endpoints.
pub const BULK_API_HOST: &str = "https://bulkapi.zerobounce.net";

/// Environment variable consulted by [`Config::from_env`].
pub const API_KEY_ENV: &str = "ZEROBOUNCE_API_KEY";

/// Configuration for a [`Client`](crate::Client).
///
/// A plain value passed in at construction; there is no process-global
/// state. The API key may be left empty here, but every operation checks
/// it before touching the network and fails with
/// [`Error::MissingApiKey`](crate::Error::MissingApiKey) if it is.
///
/// # Examples
/// ```
/// use zerobounce_client::Config;
///
/// let config = Config::new("my-api-key");
/// assert_eq!(config.host, "https://api.zerobounce.net");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// ZeroBounce API key, sent as the `api_key` query parameter on
    /// every request.
    pub api_key: String,
    /// Base URL for validate/credits/activity/usage/guessformat.
    pub host: String,
    /// Base URL for batch validation and the bulk file jobs.
    pub bulk_host: String,
    /// Extra headers merged into every request.
    pub headers: HeaderMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            host: API_HOST.to_string(),
            bulk_host: BULK_API_HOST.to_string(),
            headers: HeaderMap::new(),
        }
    }
}

impl Config {
    /// Create a configuration with the given API key and default hosts.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create a configuration reading the API key from the
    /// `ZEROBOUNCE_API_KEY` environment variable.
    ///
    /// An unset variable leaves the key empty; operations will then fail
    /// with a missing-key error rather than here.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }
}
