//! Avatar URL normalisation for rendered user records.
//!
//! Duolingo hands out protocol-relative avatar URLs without a size suffix. The
//! normaliser fixes the scheme and appends a size segment for URLs served from
//! the Duolingo image hosts, leaving everything else untouched.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Asset shown when a record carries no avatar.
pub const DEFAULT_FALLBACK_AVATAR: &str = "assets/avatar-fallback.png";

const IMAGE_DOMAIN: &str = "duolingo.com";

static SIZED_PATH_RE: OnceLock<Regex> = OnceLock::new();

fn sized_path_regex() -> &'static Regex {
    SIZED_PATH_RE.get_or_init(|| {
        Regex::new(r"/(small|medium|large)(/|$)")
            .unwrap_or_else(|error| panic!("avatar size regex failed to compile: {error}"))
    })
}

/// Size variants served by the avatar host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// Thumbnail rendition.
    Small,
    /// Default list rendition.
    #[default]
    Medium,
    /// Profile header rendition.
    Large,
}

impl AvatarSize {
    /// Path segment naming this size.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`AvatarSize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown avatar size '{0}' (expected small, medium or large)")]
pub struct ParseAvatarSizeError(String);

impl FromStr for AvatarSize {
    type Err = ParseAvatarSizeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ParseAvatarSizeError(other.to_owned())),
        }
    }
}

/// Rewrites raw avatar URLs into fully-qualified, sized URLs.
///
/// Normalisation is pure: identical inputs always produce identical output.
///
/// # Examples
/// ```
/// use duo_tracker::domain::{AvatarSize, AvatarUrlNormalizer};
///
/// let normalizer = AvatarUrlNormalizer::default();
/// assert_eq!(
///     normalizer.normalize(Some("//cdn.duolingo.com/avatar"), AvatarSize::Large),
///     "https://cdn.duolingo.com/avatar/large",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrlNormalizer {
    fallback: String,
}

impl Default for AvatarUrlNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_AVATAR)
    }
}

impl AvatarUrlNormalizer {
    /// Build a normaliser returning `fallback` for records without an avatar.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    /// Fallback asset reference.
    pub fn fallback(&self) -> &str {
        self.fallback.as_str()
    }

    /// Normalise `raw` for display at `size`.
    ///
    /// Rules apply in order: a missing or empty URL yields the fallback; a
    /// protocol-relative URL gains `https:`; a URL already carrying a size
    /// segment is returned as is; a URL on a Duolingo host gains a `size`
    /// segment; anything else passes through.
    ///
    /// Sized URLs are re-serialised in canonical form: scheme and host are
    /// lowercased, a default port is dropped and unsafe path characters are
    /// percent-encoded.
    pub fn normalize(&self, raw: Option<&str>, size: AvatarSize) -> String {
        let Some(raw) = raw.filter(|value| !value.is_empty()) else {
            return self.fallback.clone();
        };

        let secure = match raw.strip_prefix("//") {
            Some(rest) => format!("https://{rest}"),
            None => raw.to_owned(),
        };

        if sized_path_regex().is_match(&secure) {
            return secure;
        }

        append_size_segment(&secure, size).unwrap_or(secure)
    }
}

fn append_size_segment(secure: &str, size: AvatarSize) -> Option<String> {
    let mut url = Url::parse(secure).ok()?;
    if !is_image_host(url.host_str()?) {
        return None;
    }
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(size.as_str());
    Some(url.into())
}

fn is_image_host(host: &str) -> bool {
    host == IMAGE_DOMAIN
        || host
            .strip_suffix(IMAGE_DOMAIN)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
