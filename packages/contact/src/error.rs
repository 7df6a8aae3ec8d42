use reqwest::StatusCode;
use thiserror::Error;

/// Failure transmitting a submission to the contact endpoint.
///
/// Subtypes are logged at the submission boundary but never shown to the
/// user; the workflow collapses all of them into one generic
/// retry-prompting outcome.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Network-level failure (connect, DNS, body read).
    #[error("contact request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("contact endpoint returned status {0}")]
    Status(StatusCode),
}
