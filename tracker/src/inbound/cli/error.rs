//! Errors surfaced to the person running the tracker.

use thiserror::Error;

use crate::domain::TrackUserError;

/// Failures of a command-line tracking run.
///
/// `Display` yields the short message shown to the user; the underlying cause
/// stays reachable through [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No username was given and none was remembered.
    #[error("Please enter a Duolingo username")]
    MissingUsername,
    /// The tracking run failed.
    #[error("{}", track_message(.0))]
    Track(#[from] TrackUserError),
    /// The report could not be serialised.
    #[error("failed to render report: {message}")]
    Render {
        /// Serialiser failure description.
        message: String,
    },
}

impl CliError {
    /// Build [`CliError::Render`].
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

const fn track_message(error: &TrackUserError) -> &'static str {
    if error.is_not_found() {
        "User not found"
    } else {
        "Failed to fetch data from Duolingo"
    }
}
