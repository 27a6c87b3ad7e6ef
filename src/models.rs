//! Typed response models for the ZeroBounce v2 API.
//!
//! Field names mirror the vendor's JSON keys exactly. The vendor sends
//! many values as nullable strings (including numbers like
//! `domain_age_days` and booleans like `mx_found`), so those stay
//! `Option<String>` rather than guessing at a stricter type.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Result of validating a single email address.
#[derive(Debug, Clone, Deserialize)]
pub struct Validation {
    /// The address that was validated.
    pub address: String,
    /// Deliverability verdict: `valid`, `invalid`, `catch-all`,
    /// `unknown`, `spamtrap`, `abuse`, or `do_not_mail`.
    pub status: String,
    /// Finer-grained reason behind `status`.
    pub sub_status: String,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    /// Suggested correction for likely typos.
    #[serde(default)]
    pub did_you_mean: Option<String>,
    /// Age of the domain in days, as the vendor's string.
    #[serde(default)]
    pub domain_age_days: Option<String>,
    #[serde(default)]
    pub free_email: Option<bool>,
    /// `"true"` / `"false"` string from the vendor.
    #[serde(default)]
    pub mx_found: Option<String>,
    #[serde(default)]
    pub mx_record: Option<String>,
    #[serde(default)]
    pub smtp_provider: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
}

/// Result of an email activity lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    /// Whether any activity was found for the address.
    pub found: bool,
    /// Days since the last observed activity, when found.
    #[serde(default)]
    pub active_in_days: Option<String>,
}

/// API usage statistics over a date range.
///
/// The vendor also reports a long tail of `sub_status_*` counters;
/// those land in [`ApiUsage::sub_status`] keyed by the vendor's name.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUsage {
    /// Total number of validations in the window.
    pub total: i64,
    pub status_valid: i64,
    pub status_invalid: i64,
    pub status_catch_all: i64,
    pub status_do_not_mail: i64,
    pub status_spamtrap: i64,
    pub status_unknown: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub sub_status: BTreeMap<String, serde_json::Value>,
}

/// Optional name hints for [`Client::guessformat`](crate::Client::guessformat).
#[derive(Debug, Clone, Default)]
pub struct GuessNames {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl GuessNames {
    pub fn first(name: impl Into<String>) -> Self {
        Self {
            first_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Result of guessing the email format used by a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct GuessFormat {
    /// Best-guess address for the supplied names, empty without names.
    pub email: String,
    pub domain: String,
    /// Format template such as `first.last`, or `unknown`.
    pub format: String,
    pub status: String,
    pub sub_status: String,
    /// Vendor confidence label, e.g. `high` / `medium` / `low`.
    pub confidence: String,
    #[serde(default)]
    pub did_you_mean: Option<String>,
    #[serde(default)]
    pub other_domain_formats: Vec<DomainFormat>,
}

/// One alternative format the vendor observed for a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainFormat {
    pub format: String,
    pub confidence: String,
}

/// Response to a bulk file upload.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSubmit {
    pub success: bool,
    /// "File Accepted" on success, a reason otherwise.
    #[serde(default)]
    pub message: Option<String>,
    /// Handle for later check/get/delete calls.
    #[serde(default)]
    pub file_id: Option<String>,
    /// Original filename, echoed back.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Processing status of a bulk file job.
///
/// An unknown `file_id` is a soft failure: the vendor answers 2xx with
/// `success: false` and a human-readable `message` ("File cannot be
/// found." for validation jobs, "file_id is invalid." for scoring
/// jobs). Branch on [`FileStatus::success`] rather than expecting an
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct FileStatus {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    /// Lifecycle label, e.g. `Queued`, `Processing`, `Complete`.
    #[serde(default)]
    pub file_status: Option<String>,
    #[serde(default)]
    pub complete_percentage: Option<String>,
    #[serde(default)]
    pub error_reason: Option<String>,
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Response to deleting a bulk file job. Soft-fails like [`FileStatus`].
#[derive(Debug, Clone, Deserialize)]
pub struct FileDeleted {
    pub success: bool,
    /// "File Deleted" on success.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

/// Soft-failure body returned by the file endpoints for an unknown id.
#[derive(Debug, Clone, Deserialize)]
pub struct FileFailure {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Downloaded content of a finished bulk file job.
#[derive(Debug, Clone)]
pub enum FileContent {
    /// The raw result file body (CSV, with headers as uploaded).
    Ready(String),
    /// The vendor could not serve the file (unknown id, still
    /// processing); carries the `success: false` body.
    Unavailable(FileFailure),
}

impl FileContent {
    /// The file body, if the download succeeded.
    pub fn content(&self) -> Option<&str> {
        match self {
            FileContent::Ready(body) => Some(body),
            FileContent::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FileContent::Ready(_))
    }
}
