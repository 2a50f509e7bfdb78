//! Social-graph source adapter over the Duolingo HTTP API.
//!
//! This adapter owns endpoint templates and field projections; transport is
//! delegated to [`DuolingoApiClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::form_urlencoded;

use super::api_client::DuolingoApiClient;
use super::dto::{FollowersEnvelopeDto, FollowingEnvelopeDto, ProfileDto, UserLookupDto};
use crate::domain::ports::{SocialGraphSource, SocialGraphSourceError};
use crate::domain::{Profile, RelationSet, UserId};

const LOOKUP_PROJECTION: &str = "users%7Bid%7D";
const PROFILE_PROJECTION: &str = "id,name,picture,totalXp,username";
const RELATION_PROJECTION: &str = "users%7BuserId,username,picture,totalXp%7D";

/// [`SocialGraphSource`] backed by the Duolingo web API.
#[derive(Clone)]
pub struct DuolingoSocialGraphSource {
    client: DuolingoApiClient,
}

impl DuolingoSocialGraphSource {
    /// Build an adapter issuing requests through `client`.
    pub const fn new(client: DuolingoApiClient) -> Self {
        Self { client }
    }

    async fn get_decoded<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, SocialGraphSourceError> {
        let value = self.client.get(endpoint).await?;
        decode(value)
    }
}

#[async_trait]
impl SocialGraphSource for DuolingoSocialGraphSource {
    async fn lookup_user_ids(&self, username: &str) -> Result<Vec<UserId>, SocialGraphSourceError> {
        let dto: UserLookupDto = self.get_decoded(&lookup_endpoint(username)).await?;
        Ok(dto.into_ids())
    }

    async fn fetch_profile(&self, id: &UserId) -> Result<Profile, SocialGraphSourceError> {
        let dto: ProfileDto = self.get_decoded(&profile_endpoint(id)).await?;
        Ok(dto.into_domain_profile(id))
    }

    async fn fetch_followers(&self, id: &UserId) -> Result<RelationSet, SocialGraphSourceError> {
        let dto: FollowersEnvelopeDto = self
            .get_decoded(&relation_endpoint(id, RelationKind::Followers))
            .await?;
        Ok(dto.into_relation_set())
    }

    async fn fetch_following(&self, id: &UserId) -> Result<RelationSet, SocialGraphSourceError> {
        let dto: FollowingEnvelopeDto = self
            .get_decoded(&relation_endpoint(id, RelationKind::Following))
            .await?;
        Ok(dto.into_relation_set())
    }
}

#[derive(Debug, Clone, Copy)]
enum RelationKind {
    Followers,
    Following,
}

impl RelationKind {
    const fn segment(self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SocialGraphSourceError> {
    serde_json::from_value(value).map_err(|error| {
        SocialGraphSourceError::decode(format!("unexpected payload shape: {error}"))
    })
}

fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn lookup_endpoint(username: &str) -> String {
    format!(
        "users?fields={LOOKUP_PROJECTION}&username={}",
        encode_component(username)
    )
}

fn profile_endpoint(id: &UserId) -> String {
    format!(
        "users/{}?fields={PROFILE_PROJECTION}",
        encode_component(id.as_ref())
    )
}

fn relation_endpoint(id: &UserId, kind: RelationKind) -> String {
    format!(
        "friends/users/{}/{}?fields={RELATION_PROJECTION}",
        encode_component(id.as_ref()),
        kind.segment()
    )
}
