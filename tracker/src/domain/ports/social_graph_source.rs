//! Driven port for reading a user's social graph from Duolingo.
//!
//! The domain owns the record shapes so the tracker can stay
//! adapter-agnostic; adapters own URLs, credentials and JSON decoding.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Profile, RelationSet, UserId};

define_port_error! {
    /// Errors surfaced while calling the social-graph service.
    ///
    /// Every variant belongs to the same transport failure class; the split
    /// only exists for diagnostics.
    pub enum SocialGraphSourceError {
        /// The request failed before a response arrived.
        Transport {
            /// Transport failure description.
            message: String,
        } => "social graph transport failed: {message}",
        /// The service answered with a non-success status.
        Status {
            /// HTTP status code.
            status: u16,
        } => "social graph request failed with status {status}",
        /// The response body was not the expected JSON.
        Decode {
            /// Decoder failure description.
            message: String,
        } => "social graph response decode failed: {message}",
    }
}

/// Port for the four social-graph queries used by a tracking run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraphSource: Send + Sync {
    /// Look up the identifiers registered under `username`.
    ///
    /// An absent collection decodes as empty; the caller decides whether that
    /// means "not found".
    async fn lookup_user_ids(&self, username: &str) -> Result<Vec<UserId>, SocialGraphSourceError>;

    /// Fetch the full profile of `id`.
    async fn fetch_profile(&self, id: &UserId) -> Result<Profile, SocialGraphSourceError>;

    /// Fetch the accounts following `id`.
    ///
    /// An absent collection decodes as empty.
    async fn fetch_followers(&self, id: &UserId) -> Result<RelationSet, SocialGraphSourceError>;

    /// Fetch the accounts `id` follows.
    ///
    /// An absent collection decodes as empty.
    async fn fetch_following(&self, id: &UserId) -> Result<RelationSet, SocialGraphSourceError>;
}
