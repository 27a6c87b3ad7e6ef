//! ZeroBounce async client implementation.

use crate::{
    Activity, ApiUsage, Config, Error, FileContent, FileDeleted, FileFailure, FileStatus,
    FileSubmit, GuessFormat, GuessNames, Result, Validation,
};
use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::multipart;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;

/// Async client for the ZeroBounce email validation API.
///
/// Use [`Client::new`] with a [`Config`] for defaults or
/// [`Client::builder`] for custom settings like alternate hosts, extra
/// headers, or a pre-configured `reqwest` transport.
///
/// Every operation performs exactly one request and checks the API key
/// and its arguments locally first, so misconfiguration never reaches
/// the network.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

/// Selects between the two parallel bulk-file product lines, which
/// share request/response shapes but live under different paths.
#[derive(Debug, Clone, Copy)]
enum BulkApi {
    Validation,
    Scoring,
}

impl BulkApi {
    fn path(self, op: &str) -> String {
        match self {
            BulkApi::Validation => format!("/v2/{op}"),
            BulkApi::Scoring => format!("/v2/scoring/{op}"),
        }
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client from a configuration.
    ///
    /// # Examples
    /// ```
    /// # use zerobounce_client::{Client, Config};
    /// # fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new(Config::new("my-api-key"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        ClientBuilder::new().config(config).build()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a single email address.
    ///
    /// # Arguments
    /// * `email` - The address to validate (required)
    /// * `ip_address` - Optional IP the address was collected from,
    ///   used by the vendor for geolocation fields
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::{Client, Config};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new(Config::from_env())?;
    /// let result = client.validate("valid@example.com", None).await?;
    /// println!("{}: {}", result.address, result.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate(&self, email: &str, ip_address: Option<&str>) -> Result<Validation> {
        let api_key = self.require_api_key()?;
        non_empty(email, "email")?;

        let mut params = vec![("api_key", api_key), ("email", email)];
        if let Some(ip) = ip_address {
            params.push(("ip_address", ip));
        }

        let body = self.get(&self.config.host, "/v2/validate", &params).await?;
        decode(&body)
    }

    /// Validate a batch of email addresses in one request.
    ///
    /// Results come back in the same order as the input, one per email.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::{Client, Config};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new(Config::from_env())?;
    /// let emails = vec!["a@example.com".to_string(), "b@example.com".to_string()];
    /// for result in client.validate_batch(&emails).await? {
    ///     println!("{}: {}", result.address, result.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate_batch(&self, emails: &[String]) -> Result<Vec<Validation>> {
        let api_key = self.require_api_key()?;
        if emails.is_empty() {
            return Err(Error::InvalidArgument(
                "email batch must not be empty".to_string(),
            ));
        }
        if emails.iter().any(|email| email.trim().is_empty()) {
            return Err(Error::InvalidArgument(
                "email batch must not contain empty addresses".to_string(),
            ));
        }

        let batch: Vec<Value> = emails
            .iter()
            .map(|email| json!({ "email_address": email }))
            .collect();
        let payload = json!({ "api_key": api_key, "email_batch": batch });

        let response = self
            .http
            .post(url(&self.config.bulk_host, "/v2/validatebatch"))
            .query(&[("api_key", api_key)])
            .headers(self.config.headers.clone())
            .json(&payload)
            .send()
            .await?;

        let body = into_text(response).await?;
        let value = parse_checked(&body)?;
        let results = value
            .get("email_batch")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        serde_json::from_value(results).map_err(Into::into)
    }

    /// Get the remaining credit balance for the account.
    ///
    /// Returns `-1` when the vendor cannot determine the balance,
    /// typically because the API key is invalid. This is the one
    /// operation where an auth problem yields a sentinel value instead
    /// of an error, matching the vendor's own contract for the
    /// endpoint.
    pub async fn credits(&self) -> Result<i64> {
        let api_key = self.require_api_key()?;

        let body = self
            .get(&self.config.host, "/v2/getcredits", &[("api_key", api_key)])
            .await?;
        let value: Value = serde_json::from_str(&body)?;
        if vendor_error(&value).is_some() {
            return Ok(-1);
        }

        match value.get("Credits") {
            Some(Value::String(credits)) => credits
                .trim()
                .parse()
                .map_err(|_| Error::Api(format!("unexpected credits value: {credits}"))),
            Some(Value::Number(credits)) => credits
                .as_i64()
                .ok_or_else(|| Error::Api(format!("unexpected credits value: {credits}"))),
            _ => Err(Error::Api(
                "response is missing the Credits field".to_string(),
            )),
        }
    }

    /// Look up recent engagement activity for an email address.
    pub async fn activity(&self, email: &str) -> Result<Activity> {
        let api_key = self.require_api_key()?;
        non_empty(email, "email")?;

        let body = self
            .get(
                &self.config.host,
                "/v2/activity",
                &[("api_key", api_key), ("email", email)],
            )
            .await?;
        decode(&body)
    }

    /// Get API usage statistics between two dates (inclusive).
    pub async fn api_usage(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<ApiUsage> {
        let api_key = self.require_api_key()?;

        let start = start_date.format("%Y-%m-%d").to_string();
        let end = end_date.format("%Y-%m-%d").to_string();
        let body = self
            .get(
                &self.config.host,
                "/v2/getapiusage",
                &[
                    ("api_key", api_key),
                    ("start_date", start.as_str()),
                    ("end_date", end.as_str()),
                ],
            )
            .await?;
        decode(&body)
    }

    /// Guess the email address format used by a domain.
    ///
    /// Name hints are optional; with none given the vendor still
    /// reports the domain's dominant format.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::{Client, Config, GuessNames};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new(Config::from_env())?;
    /// let guess = client
    ///     .guessformat("zerobounce.net", GuessNames::first("John"))
    ///     .await?;
    /// println!("{} uses {}", guess.domain, guess.format);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn guessformat(&self, domain: &str, names: GuessNames) -> Result<GuessFormat> {
        let api_key = self.require_api_key()?;
        non_empty(domain, "domain")?;

        let mut params = vec![("api_key", api_key), ("domain", domain)];
        if let Some(first) = names.first_name.as_deref() {
            params.push(("first_name", first));
        }
        if let Some(middle) = names.middle_name.as_deref() {
            params.push(("middle_name", middle));
        }
        if let Some(last) = names.last_name.as_deref() {
            params.push(("last_name", last));
        }

        let body = self
            .get(&self.config.host, "/v2/guessformat", &params)
            .await?;
        decode(&body)
    }

    /// Upload a CSV of email addresses for bulk validation.
    ///
    /// The file is sent as multipart form data with its original
    /// filename preserved; the returned
    /// [`file_id`](FileSubmit::file_id) drives the later check, get,
    /// and delete calls.
    pub async fn validate_file_send(&self, path: impl AsRef<Path>) -> Result<FileSubmit> {
        self.file_send(BulkApi::Validation, path.as_ref()).await
    }

    /// Check the processing status of a bulk validation file.
    ///
    /// An unknown `file_id` comes back as a normal [`FileStatus`] with
    /// `success == false`, not as an error.
    pub async fn validate_file_check(&self, file_id: &str) -> Result<FileStatus> {
        self.file_check(BulkApi::Validation, file_id).await
    }

    /// Download the results of a finished bulk validation file.
    pub async fn validate_file_get(&self, file_id: &str) -> Result<FileContent> {
        self.file_get(BulkApi::Validation, file_id).await
    }

    /// Delete a bulk validation file and its results.
    pub async fn validate_file_delete(&self, file_id: &str) -> Result<FileDeleted> {
        self.file_delete(BulkApi::Validation, file_id).await
    }

    /// Upload a CSV of email addresses for bulk scoring.
    pub async fn scoring_file_send(&self, path: impl AsRef<Path>) -> Result<FileSubmit> {
        self.file_send(BulkApi::Scoring, path.as_ref()).await
    }

    /// Check the processing status of a bulk scoring file.
    pub async fn scoring_file_check(&self, file_id: &str) -> Result<FileStatus> {
        self.file_check(BulkApi::Scoring, file_id).await
    }

    /// Download the results of a finished bulk scoring file.
    pub async fn scoring_file_get(&self, file_id: &str) -> Result<FileContent> {
        self.file_get(BulkApi::Scoring, file_id).await
    }

    /// Delete a bulk scoring file and its results.
    pub async fn scoring_file_delete(&self, file_id: &str) -> Result<FileDeleted> {
        self.file_delete(BulkApi::Scoring, file_id).await
    }

    async fn file_send(&self, api: BulkApi, path: &Path) -> Result<FileSubmit> {
        let api_key = self.require_api_key()?.to_string();
        if !path.is_file() {
            return Err(Error::InvalidArgument(format!(
                "no such file: {}",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("file has no usable name: {}", path.display()))
            })?;

        let bytes = tokio::fs::read(path).await?;
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(url(&self.config.bulk_host, &api.path("sendfile")))
            .query(&[("api_key", api_key.as_str())])
            .headers(self.config.headers.clone())
            .multipart(form)
            .send()
            .await?;

        let body = into_text(response).await?;
        decode(&body)
    }

    async fn file_check(&self, api: BulkApi, file_id: &str) -> Result<FileStatus> {
        let api_key = self.require_api_key()?;
        non_empty(file_id, "file_id")?;

        let body = self
            .get(
                &self.config.bulk_host,
                &api.path("filestatus"),
                &[("api_key", api_key), ("file_id", file_id)],
            )
            .await?;
        // The soft-failure body is the same struct with success=false.
        serde_json::from_str(&body).map_err(Into::into)
    }

    async fn file_get(&self, api: BulkApi, file_id: &str) -> Result<FileContent> {
        let api_key = self.require_api_key()?;
        non_empty(file_id, "file_id")?;

        let body = self
            .get(
                &self.config.bulk_host,
                &api.path("getfile"),
                &[("api_key", api_key), ("file_id", file_id)],
            )
            .await?;

        // A finished job downloads as the raw result file; an unknown
        // or unfinished one answers with a success=false JSON body.
        if let Ok(failure) = serde_json::from_str::<FileFailure>(&body) {
            if !failure.success {
                return Ok(FileContent::Unavailable(failure));
            }
        }
        Ok(FileContent::Ready(body))
    }

    async fn file_delete(&self, api: BulkApi, file_id: &str) -> Result<FileDeleted> {
        let api_key = self.require_api_key()?;
        non_empty(file_id, "file_id")?;

        let body = self
            .get(
                &self.config.bulk_host,
                &api.path("deletefile"),
                &[("api_key", api_key), ("file_id", file_id)],
            )
            .await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// Common GET request pattern: build the URL, attach query
    /// parameters and default headers, return the validated body text.
    async fn get(&self, base: &str, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .http
            .get(url(base, path))
            .query(params)
            .headers(self.config.headers.clone())
            .send()
            .await?;
        into_text(response).await
    }

    fn require_api_key(&self) -> Result<&str> {
        if self.config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(&self.config.api_key)
    }
}

fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{name} is required")));
    }
    Ok(())
}

/// Map the HTTP status, then hand back the body for decoding.
async fn into_text(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Unauthorized { status, body });
    }
    if !status.is_success() {
        return Err(Error::Status { status, body });
    }
    Ok(body)
}

/// Parse a JSON body and surface vendor-level errors embedded in it.
fn parse_checked(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(message) = vendor_error(&value) {
        return Err(Error::from_api_message(message));
    }
    Ok(value)
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    let value = parse_checked(body)?;
    serde_json::from_value(value).map_err(Into::into)
}

/// Extract the vendor's embedded error message, if any.
///
/// Single-call endpoints use `{"error": "..."}`; the batch endpoint
/// reports `{"errors": [{"error": "...", "email_address": "all"}]}`.
fn vendor_error(value: &Value) -> Option<String> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    let first = value.get("errors")?.as_array()?.first()?;
    match first {
        Value::String(message) => Some(message.clone()),
        Value::Object(_) => first
            .get("error")
            .or_else(|| first.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for configuring a ZeroBounce client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: Config,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Empty API key (operations fail pre-flight until one is set)
    /// - Production API and bulk API hosts
    /// - No extra headers
    /// - 30 second request timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Override the base URL for the single-email endpoints.
    ///
    /// Useful for testing against a local mock server.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Override the base URL for the batch and bulk-file endpoints.
    pub fn bulk_host(mut self, bulk_host: impl Into<String>) -> Self {
        self.config.bulk_host = bulk_host.into();
        self
    }

    /// Extra headers to send with every request.
    pub fn headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Set the request timeout (default: 30 seconds).
    ///
    /// Ignored when a custom transport is supplied via
    /// [`ClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a pre-configured `reqwest` client as the transport.
    ///
    /// This is the hook for proxies, TLS settings, or connection-pool
    /// tuning beyond what the builder exposes.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// No network traffic happens here; the API key is only checked
    /// when an operation runs.
    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()?,
        };

        Ok(Client {
            http,
            config: self.config,
        })
    }
}
