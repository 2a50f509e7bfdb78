//! Concurrent retrieval of the followers and following collections.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::ports::{SocialGraphSource, SocialGraphSourceError};
use super::social_graph::{RelationSet, UserId};

/// Both relation collections of one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relations {
    /// Accounts following the user.
    pub followers: RelationSet,
    /// Accounts the user follows.
    pub following: RelationSet,
}

/// Fans out the two relation requests and joins them.
#[derive(Clone)]
pub struct RelationFetcher {
    source: Arc<dyn SocialGraphSource>,
}

impl RelationFetcher {
    /// Build a fetcher over `source`.
    pub fn new(source: Arc<dyn SocialGraphSource>) -> Self {
        Self { source }
    }

    /// Fetch followers and following for `id` concurrently.
    ///
    /// Both requests are spawned as independent tasks before either is
    /// awaited. The first failure is returned; the sibling task keeps running
    /// to completion and its result is discarded.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the first [`SocialGraphSourceError`] observed, or a transport
    /// error when a fetch task aborts.
    pub async fn fetch_both(&self, id: &UserId) -> Result<Relations, SocialGraphSourceError> {
        let followers_task = {
            let source = Arc::clone(&self.source);
            let id = id.clone();
            tokio::spawn(async move { source.fetch_followers(&id).await })
        };
        let following_task = {
            let source = Arc::clone(&self.source);
            let id = id.clone();
            tokio::spawn(async move { source.fetch_following(&id).await })
        };

        let (followers, following) =
            tokio::try_join!(join_fetch(followers_task), join_fetch(following_task))?;
        Ok(Relations {
            followers,
            following,
        })
    }
}

async fn join_fetch(
    task: JoinHandle<Result<RelationSet, SocialGraphSourceError>>,
) -> Result<RelationSet, SocialGraphSourceError> {
    task.await.map_err(|error| {
        SocialGraphSourceError::transport(format!("relation fetch task aborted: {error}"))
    })?
}
