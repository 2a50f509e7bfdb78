//! Domain primitives, ports and the tracking pipeline.
//!
//! Purpose: own the social-graph records, the non-follower diff, avatar URL
//! normalisation and the orchestration of one tracking run. Adapters depend on
//! this module; it depends on no adapter.
//!
//! Public surface:
//! - `SocialGraphTracker`: `track_user` entry point.
//! - `UserResolver`, `RelationFetcher`: resolution and concurrent relation
//!   retrieval.
//! - `find_non_followers`: the asymmetric set difference.
//! - `AvatarUrlNormalizer`: pure avatar URL rewriting.
//! - `TrackUserError`: "not found" versus transport failures.

pub mod avatar;
pub mod error;
pub mod non_followers;
pub mod ports;
pub mod relations;
pub mod social_graph;
pub mod tracker;
pub mod user_resolver;

pub use self::avatar::{AvatarSize, AvatarUrlNormalizer, DEFAULT_FALLBACK_AVATAR};
pub use self::error::TrackUserError;
pub use self::non_followers::find_non_followers;
pub use self::relations::{RelationFetcher, Relations};
pub use self::social_graph::{LightweightUser, Profile, RelationSet, TrackUserReport, UserId};
pub use self::tracker::SocialGraphTracker;
pub use self::user_resolver::UserResolver;
