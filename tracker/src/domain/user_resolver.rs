//! Username to identifier resolution.

use std::sync::Arc;

use tracing::debug;

use super::error::TrackUserError;
use super::ports::SocialGraphSource;
use super::social_graph::UserId;

/// Maps a username to its stable [`UserId`] with a lightweight lookup.
#[derive(Clone)]
pub struct UserResolver {
    source: Arc<dyn SocialGraphSource>,
}

impl UserResolver {
    /// Build a resolver over `source`.
    pub fn new(source: Arc<dyn SocialGraphSource>) -> Self {
        Self { source }
    }

    /// Resolve `username` to the first identifier the service reports.
    ///
    /// The username is queried verbatim; callers trim it beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`TrackUserError::UserNotFound`] when the lookup collection is
    /// empty or absent, and [`TrackUserError::Transport`] when the request
    /// fails.
    pub async fn resolve(&self, username: &str) -> Result<UserId, TrackUserError> {
        let ids = self.source.lookup_user_ids(username).await?;
        let id = ids
            .into_iter()
            .next()
            .ok_or_else(|| TrackUserError::user_not_found(username))?;
        debug!(%username, user_id = %id, "resolved username");
        Ok(id)
    }
}
