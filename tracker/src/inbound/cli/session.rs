//! Username intake and tracking for one command-line invocation.

use std::sync::Arc;

use tracing::{debug, warn};

use super::error::CliError;
use crate::domain::ports::LastUsernameStore;
use crate::domain::{SocialGraphTracker, TrackUserReport};

/// Drives one tracking run from raw command-line input.
///
/// An omitted username falls back to the one remembered from the previous
/// run. The chosen username is remembered before any request is issued;
/// history failures are logged and never abort the run.
#[derive(Clone)]
pub struct TrackSession {
    tracker: SocialGraphTracker,
    history: Arc<dyn LastUsernameStore>,
}

impl TrackSession {
    /// Build a session over a tracker and a username history.
    pub fn new(tracker: SocialGraphTracker, history: Arc<dyn LastUsernameStore>) -> Self {
        Self { tracker, history }
    }

    /// Pick the username to track.
    ///
    /// An explicit argument is trimmed and used as-is; an explicit blank
    /// argument is rejected rather than replaced by the remembered one.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingUsername`] when no non-blank username is
    /// available.
    pub fn resolve_username(&self, argument: Option<&str>) -> Result<String, CliError> {
        let candidate = match argument {
            Some(raw) => Some(raw.trim().to_owned()),
            None => self.remembered_username(),
        };
        candidate
            .filter(|username| !username.is_empty())
            .ok_or(CliError::MissingUsername)
    }

    /// Resolve the username, remember it and track it.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingUsername`] before any request when no
    /// username is available, and [`CliError::Track`] when tracking fails.
    pub async fn run(&self, argument: Option<&str>) -> Result<TrackUserReport, CliError> {
        let username = self.resolve_username(argument)?;
        if let Err(error) = self.history.save(&username) {
            warn!(%error, "could not remember username");
        }
        Ok(self.tracker.track_user(&username).await?)
    }

    fn remembered_username(&self) -> Option<String> {
        match self.history.load() {
            Ok(stored) => {
                debug!(found = stored.is_some(), "loaded remembered username");
                stored.map(|username| username.trim().to_owned())
            }
            Err(error) => {
                warn!(%error, "could not load remembered username");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Username intake, history handling and error mapping.

    use super::*;
    use crate::domain::ports::{
        LastUsernameStoreError, MockLastUsernameStore, MockSocialGraphSource,
        NoopLastUsernameStore, SocialGraphSourceError,
    };
    use crate::domain::{Profile, TrackUserError, UserId};
    use mockall::predicate::eq;
    use rstest::rstest;

    fn silent_source() -> MockSocialGraphSource {
        let mut source = MockSocialGraphSource::new();
        source.expect_lookup_user_ids().never();
        source.expect_fetch_profile().never();
        source.expect_fetch_followers().never();
        source.expect_fetch_following().never();
        source
    }

    fn answering_source(expected_username: &'static str) -> MockSocialGraphSource {
        let mut source = MockSocialGraphSource::new();
        source
            .expect_lookup_user_ids()
            .with(eq(expected_username))
            .times(1)
            .return_once(|_| Ok(vec![UserId::new("7")]));
        source.expect_fetch_profile().times(1).return_once(|id| {
            Ok(Profile {
                id: id.clone(),
                display_name: None,
                username: Some("alice".to_owned()),
                avatar_url: None,
                total_xp: None,
            })
        });
        source.expect_fetch_followers().returning(|_| Ok(Vec::new()));
        source.expect_fetch_following().returning(|_| Ok(Vec::new()));
        source
    }

    fn session(source: MockSocialGraphSource, history: impl LastUsernameStore + 'static) -> TrackSession {
        TrackSession::new(SocialGraphTracker::new(Arc::new(source)), Arc::new(history))
    }

    #[rstest]
    #[case::explicit(Some("  alice "), None, "alice")]
    #[case::explicit_beats_history(Some("alice"), Some("bob"), "alice")]
    #[case::history_fallback(None, Some(" bob\n"), "bob")]
    fn picks_the_username(
        #[case] argument: Option<&str>,
        #[case] stored: Option<&'static str>,
        #[case] expected: &str,
    ) {
        let mut history = MockLastUsernameStore::new();
        history
            .expect_load()
            .returning(move || Ok(stored.map(str::to_owned)));

        let username = session(silent_source(), history)
            .resolve_username(argument)
            .expect("username resolves");

        assert_eq!(username, expected);
    }

    #[rstest]
    #[case::blank_argument(Some("   "), Some("bob"))]
    #[case::nothing_at_all(None, None)]
    #[case::blank_history(None, Some("  "))]
    fn rejects_missing_usernames(
        #[case] argument: Option<&str>,
        #[case] stored: Option<&'static str>,
    ) {
        let mut history = MockLastUsernameStore::new();
        history
            .expect_load()
            .returning(move || Ok(stored.map(str::to_owned)));

        let error = session(silent_source(), history)
            .resolve_username(argument)
            .expect_err("username is missing");

        assert_eq!(error, CliError::MissingUsername);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_username_issues_no_requests() {
        let error = session(silent_source(), NoopLastUsernameStore)
            .run(Some(""))
            .await
            .expect_err("username is missing");

        assert_eq!(error, CliError::MissingUsername);
    }

    #[rstest]
    #[tokio::test]
    async fn username_is_remembered_before_tracking() {
        let mut history = MockLastUsernameStore::new();
        history
            .expect_save()
            .with(eq("alice"))
            .times(1)
            .returning(|_| Ok(()));

        let report = session(answering_source("alice"), history)
            .run(Some(" alice "))
            .await
            .expect("tracking succeeds");

        assert_eq!(report.profile.id, UserId::new("7"));
    }

    #[rstest]
    #[tokio::test]
    async fn history_failures_do_not_abort_the_run() {
        let mut history = MockLastUsernameStore::new();
        history
            .expect_load()
            .returning(|| Err(LastUsernameStoreError::io("disk on fire")));
        history
            .expect_save()
            .returning(|_| Err(LastUsernameStoreError::io("disk on fire")));

        let result = session(answering_source("alice"), history)
            .run(Some("alice"))
            .await;

        assert!(result.is_ok(), "unexpected failure: {result:?}");
    }

    #[rstest]
    #[tokio::test]
    async fn tracking_failures_are_wrapped() {
        let mut source = MockSocialGraphSource::new();
        source
            .expect_lookup_user_ids()
            .return_once(|_| Err(SocialGraphSourceError::status(500_u16)));

        let error = session(source, NoopLastUsernameStore)
            .run(Some("alice"))
            .await
            .expect_err("lookup fails");

        assert_eq!(
            error,
            CliError::Track(TrackUserError::Transport(
                SocialGraphSourceError::status(500_u16)
            ))
        );
        assert_eq!(error.to_string(), "Failed to fetch data from Duolingo");
    }
}
