//! Orchestration of one non-follower tracking run.
//!
//! The tracker resolves the username, fetches the profile, fans out the two
//! relation requests and diffs the collections. Each run is independent and
//! holds no state between calls.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::TrackUserError;
use super::non_followers::find_non_followers;
use super::ports::SocialGraphSource;
use super::relations::{RelationFetcher, Relations};
use super::social_graph::TrackUserReport;
use super::user_resolver::UserResolver;

/// Entry point of the retrieval-and-diff pipeline.
#[derive(Clone)]
pub struct SocialGraphTracker {
    source: Arc<dyn SocialGraphSource>,
    resolver: UserResolver,
    relations: RelationFetcher,
}

impl SocialGraphTracker {
    /// Build a tracker over one social-graph source.
    pub fn new(source: Arc<dyn SocialGraphSource>) -> Self {
        Self {
            resolver: UserResolver::new(Arc::clone(&source)),
            relations: RelationFetcher::new(Arc::clone(&source)),
            source,
        }
    }

    /// Track `username` and report who does not follow back.
    ///
    /// Requests run as `lookup → profile → (followers ∥ following)`. A failure
    /// at any stage aborts the run and no later request in the chain is
    /// issued.
    ///
    /// # Errors
    ///
    /// Returns [`TrackUserError::UserNotFound`] when the username is unknown
    /// and [`TrackUserError::Transport`] for any request failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let tracker = SocialGraphTracker::new(Arc::new(source));
    /// let report = tracker.track_user("alice").await?;
    /// println!("{} do not follow back", report.non_follower_count());
    /// # Ok::<(), duo_tracker::domain::TrackUserError>(())
    /// ```
    pub async fn track_user(&self, username: &str) -> Result<TrackUserReport, TrackUserError> {
        info!(%username, "tracking non-followers");

        let id = self.resolver.resolve(username).await?;
        let profile = self.source.fetch_profile(&id).await?;
        debug!(user_id = %id, "fetched profile");

        let Relations {
            followers,
            following,
        } = self.relations.fetch_both(&id).await?;
        let non_followers = find_non_followers(&followers, &following);

        let report = TrackUserReport {
            profile,
            followers_count: followers.len(),
            following_count: following.len(),
            non_followers,
        };
        info!(
            %username,
            followers = report.followers_count,
            following = report.following_count,
            non_followers = report.non_follower_count(),
            "tracking finished"
        );
        Ok(report)
    }
}
