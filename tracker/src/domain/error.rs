//! Failure taxonomy for a tracking run.
//!
//! These errors are presentation agnostic. Inbound adapters decide how to
//! phrase them for the user.

use thiserror::Error;

use super::ports::SocialGraphSourceError;

/// Reasons a tracking run aborts.
///
/// A failure at any stage aborts the whole run; no partial report is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackUserError {
    /// The username lookup returned no accounts.
    #[error("user '{username}' not found")]
    UserNotFound {
        /// Username exactly as it was queried.
        username: String,
    },
    /// A request failed or returned an unusable body.
    #[error(transparent)]
    Transport(#[from] SocialGraphSourceError),
}

impl TrackUserError {
    /// Build [`TrackUserError::UserNotFound`].
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    /// Whether this is the "user not found" signal rather than a transport
    /// failure.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    //! Classification of tracking failures.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(TrackUserError::user_not_found("alice"), true)]
    #[case::status(SocialGraphSourceError::status(500_u16).into(), false)]
    #[case::decode(SocialGraphSourceError::decode("eof").into(), false)]
    #[case::transport(SocialGraphSourceError::transport("reset").into(), false)]
    fn not_found_is_distinguished_from_transport(
        #[case] error: TrackUserError,
        #[case] expected: bool,
    ) {
        assert_eq!(error.is_not_found(), expected);
    }

    #[test]
    fn transport_errors_keep_their_message() {
        let error = TrackUserError::from(SocialGraphSourceError::status(404_u16));
        assert_eq!(
            error.to_string(),
            "social graph request failed with status 404"
        );
    }
}
