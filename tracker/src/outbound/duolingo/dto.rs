//! DTOs for decoding Duolingo JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Missing collections, missing wrappers and explicit
//! `null`s all decode as empty.

use serde::Deserialize;

use crate::domain::{LightweightUser, Profile, RelationSet, UserId};

#[derive(Debug, Deserialize)]
pub(super) struct UserLookupDto {
    #[serde(default)]
    users: Option<Vec<UserIdDto>>,
}

#[derive(Debug, Deserialize)]
struct UserIdDto {
    id: UserId,
}

impl UserLookupDto {
    pub(super) fn into_ids(self) -> Vec<UserId> {
        self.users
            .unwrap_or_default()
            .into_iter()
            .map(|user| user.id)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProfileDto {
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    picture: Option<String>,
    #[serde(default)]
    total_xp: Option<u64>,
}

impl ProfileDto {
    /// Map into a domain profile; `requested` stands in for a missing `id`.
    pub(super) fn into_domain_profile(self, requested: &UserId) -> Profile {
        Profile {
            id: self.id.unwrap_or_else(|| requested.clone()),
            display_name: self.name,
            username: self.username,
            avatar_url: self.picture,
            total_xp: self.total_xp,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct FollowersEnvelopeDto {
    #[serde(default)]
    followers: Option<RelationPageDto>,
}

impl FollowersEnvelopeDto {
    pub(super) fn into_relation_set(self) -> RelationSet {
        RelationPageDto::flatten(self.followers)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct FollowingEnvelopeDto {
    #[serde(default)]
    following: Option<RelationPageDto>,
}

impl FollowingEnvelopeDto {
    pub(super) fn into_relation_set(self) -> RelationSet {
        RelationPageDto::flatten(self.following)
    }
}

#[derive(Debug, Deserialize)]
struct RelationPageDto {
    #[serde(default)]
    users: Option<Vec<RelationUserDto>>,
}

impl RelationPageDto {
    fn flatten(page: Option<Self>) -> RelationSet {
        page.and_then(|page| page.users)
            .unwrap_or_default()
            .into_iter()
            .map(RelationUserDto::into_lightweight_user)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationUserDto {
    user_id: UserId,
    #[serde(default)]
    username: Option<String>,
    #[serde(default, alias = "name")]
    display_name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
    #[serde(default)]
    total_xp: Option<u64>,
}

impl RelationUserDto {
    fn into_lightweight_user(self) -> LightweightUser {
        LightweightUser {
            id: self.user_id,
            username: self.username,
            display_name: self.display_name,
            avatar_url: self.picture,
            total_xp: self.total_xp,
        }
    }
}
