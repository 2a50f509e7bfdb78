//! Social-graph records returned by the Duolingo service.
//!
//! Every record is created fresh for one tracking run and never cached. The
//! presentation layer consumes them once and drops them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier naming one Duolingo account.
///
/// The service encodes ids as JSON integers, while other clients treat them as
/// strings; both decode into the same value.
///
/// # Examples
/// ```
/// use duo_tracker::domain::UserId;
///
/// let from_number: UserId = serde_json::from_str("123456").expect("numeric id");
/// let from_string: UserId = serde_json::from_str("\"123456\"").expect("string id");
/// assert_eq!(from_number, from_string);
/// assert_eq!(from_number.as_ref(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match RawUserId::deserialize(deserializer)? {
            RawUserId::Number(value) => value.to_string(),
            RawUserId::Signed(value) => value.to_string(),
            RawUserId::Text(value) => value,
        };
        Ok(Self(id))
    }
}

/// One entry of a followers or following collection.
///
/// Entries compare by [`UserId`] when diffing; the remaining fields are
/// display data and may be stale relative to the account's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightweightUser {
    /// Identifier used as the membership key.
    pub id: UserId,
    /// Login name, used for profile links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Raw avatar URL as returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Lifetime XP total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_xp: Option<u64>,
}

impl LightweightUser {
    /// Build an entry carrying only its identifier.
    pub fn with_id(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            username: None,
            display_name: None,
            avatar_url: None,
            total_xp: None,
        }
    }
}

/// Ordered relation collection, in the order the service returned it.
pub type RelationSet = Vec<LightweightUser>;

/// Full profile of the queried account.
///
/// Absent fields stay `None`; renderers must tolerate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Resolved account identifier.
    pub id: UserId,
    /// Human-readable name.
    pub display_name: Option<String>,
    /// Login name.
    pub username: Option<String>,
    /// Raw avatar URL as returned by the service.
    pub avatar_url: Option<String>,
    /// Fresh lifetime XP total.
    pub total_xp: Option<u64>,
}

/// Outcome of one tracking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackUserReport {
    /// Profile of the tracked account.
    pub profile: Profile,
    /// Size of the followers collection.
    pub followers_count: usize,
    /// Size of the following collection.
    pub following_count: usize,
    /// Followed accounts that do not follow back, in following order.
    pub non_followers: Vec<LightweightUser>,
}

impl TrackUserReport {
    /// Number of followed accounts that do not follow back.
    pub fn non_follower_count(&self) -> usize {
        self.non_followers.len()
    }
}
