//! # ZeroBounce Client
//! Asynchronous wrapper around the ZeroBounce email validation HTTP API, providing typed methods to validate addresses one at a time or in batches, check account credits, pull usage statistics, guess a domain's email format, and drive asynchronous bulk-file jobs from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers cleaning mailing lists, gating signups, or scoring address quality without building SMTP probing themselves: construct a [`Client`] from a [`Config`] holding your API key, call [`Client::validate`] or [`Client::validate_batch`] for interactive checks, and use the `*_file_send` / `*_file_check` / `*_file_get` / `*_file_delete` families for the vendor's bulk validation and scoring pipelines.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a mail sender or a local validator. It only proxies the ZeroBounce service and inherits its availability, rate limits, and credit accounting. No retries, caching, or job-state tracking: bulk jobs are polled by the caller via the check operations.
//!
//! ## Errors
//! Missing API keys and malformed arguments fail locally as [`Error::MissingApiKey`] and [`Error::InvalidArgument`] before any request is sent. HTTP 401/403 surfaces as [`Error::Unauthorized`]; vendor errors embedded in 2xx bodies become [`Error::InvalidApiKey`] or [`Error::Api`]; transport and decode problems are [`Error::Request`] and [`Error::Json`]. Two vendor quirks are preserved deliberately: [`Client::credits`] returns `-1` instead of erroring on an invalid key, and the file-job check/get/delete operations return soft failures (`success == false`) as ordinary results.
//!
//! ## Example
//! ```no_run
//! use zerobounce_client::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zerobounce_client::Error> {
//!     let client = Client::new(Config::from_env())?;
//!
//!     let result = client.validate("valid@example.com", None).await?;
//!     println!("{} is {}", result.address, result.status);
//!
//!     let credits = client.credits().await?;
//!     println!("{credits} credits remaining");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use config::{API_HOST, API_KEY_ENV, BULK_API_HOST, Config};
pub use error::Error;
pub use models::{
    Activity, ApiUsage, DomainFormat, FileContent, FileDeleted, FileFailure, FileStatus,
    FileSubmit, GuessFormat, GuessNames, Validation,
};

/// Result type alias for ZeroBounce operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
