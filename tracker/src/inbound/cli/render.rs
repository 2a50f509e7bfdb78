//! Text and JSON views of a tracking report.

use reqwest::Url;
use serde::Serialize;

use super::error::CliError;
use crate::domain::{AvatarSize, AvatarUrlNormalizer, LightweightUser, Profile, TrackUserReport};

/// Public profile page root; the username is appended as one path segment.
pub const PROFILE_URL_BASE: &str = "https://www.duolingo.com/profile/";

/// Presentation-ready report with normalised avatars and profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    /// The tracked account.
    pub profile: ProfileView,
    /// Size of the followers collection.
    pub followers_count: usize,
    /// Size of the following collection.
    pub following_count: usize,
    /// Size of `non_followers`.
    pub non_follower_count: usize,
    /// Accounts followed but not following back, in following order.
    pub non_followers: Vec<UserView>,
}

/// The tracked account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Service identifier.
    pub id: String,
    /// Display name, when the service returned one.
    pub display_name: Option<String>,
    /// Handle, when the service returned one.
    pub username: Option<String>,
    /// Sized avatar URL or the fallback asset.
    pub avatar_url: String,
    /// Lifetime XP, when the service returned it.
    pub total_xp: Option<u64>,
    /// Public profile page, when the handle is known.
    pub profile_url: Option<String>,
}

/// One account in the non-follower list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Service identifier.
    pub id: String,
    /// Handle, when the service returned one.
    pub username: Option<String>,
    /// Sized avatar URL or the fallback asset.
    pub avatar_url: String,
    /// Lifetime XP, when the service returned it.
    pub total_xp: Option<u64>,
    /// Public profile page, when the handle is known.
    pub profile_url: Option<String>,
}

impl ReportView {
    /// Build the view, normalising every avatar to `size`.
    pub fn new(report: &TrackUserReport, avatars: &AvatarUrlNormalizer, size: AvatarSize) -> Self {
        Self {
            profile: ProfileView::new(&report.profile, avatars, size),
            followers_count: report.followers_count,
            following_count: report.following_count,
            non_follower_count: report.non_follower_count(),
            non_followers: report
                .non_followers
                .iter()
                .map(|user| UserView::new(user, avatars, size))
                .collect(),
        }
    }
}

impl ProfileView {
    fn new(profile: &Profile, avatars: &AvatarUrlNormalizer, size: AvatarSize) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name.clone(),
            username: profile.username.clone(),
            avatar_url: avatars.normalize(profile.avatar_url.as_deref(), size),
            total_xp: profile.total_xp,
            profile_url: profile.username.as_deref().and_then(profile_url),
        }
    }
}

impl UserView {
    fn new(user: &LightweightUser, avatars: &AvatarUrlNormalizer, size: AvatarSize) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar_url: avatars.normalize(user.avatar_url.as_deref(), size),
            total_xp: user.total_xp,
            profile_url: user.username.as_deref().and_then(profile_url),
        }
    }
}

/// Public profile page for `username`, or `None` for a blank handle.
#[must_use]
pub fn profile_url(username: &str) -> Option<String> {
    if username.trim().is_empty() {
        return None;
    }
    let mut url = Url::parse(PROFILE_URL_BASE).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(username);
    Some(url.into())
}

/// Format `value` with comma thousands separators, e.g. `1234567` as
/// `1,234,567`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    let groups: Vec<String> = digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect())
        .collect();
    groups.join(",")
}

/// Render the report for a terminal.
///
/// The non-follower section is omitted when the list is empty. An entry's XP
/// line is omitted when the XP is absent or zero.
#[must_use]
pub fn render_text(view: &ReportView) -> String {
    let profile = &view.profile;
    let username = profile
        .username
        .as_deref()
        .filter(|username| !username.is_empty());
    let display_name = profile
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty());
    let heading = match (display_name, username) {
        (Some(name), Some(handle)) => format!("{name} (@{handle})"),
        (None, Some(handle)) => format!("@{handle}"),
        (Some(name), None) => name.to_owned(),
        (None, None) => profile.id.clone(),
    };

    let mut lines = vec![heading, format!("Avatar: {}", profile.avatar_url)];
    if let Some(url) = &profile.profile_url {
        lines.push(format!("Profile: {url}"));
    }
    lines.extend([
        format!(
            "Total XP: {}",
            format_thousands(profile.total_xp.unwrap_or_default())
        ),
        format!("Followers: {}", view.followers_count),
        format!("Following: {}", view.following_count),
        format!("Not following back: {}", view.non_follower_count),
    ]);

    if !view.non_followers.is_empty() {
        lines.push(String::new());
        lines.push("Accounts not following back:".to_owned());
        for user in &view.non_followers {
            lines.push(format!("  {}", user.username.as_deref().unwrap_or(&user.id)));
            if let Some(url) = &user.profile_url {
                lines.push(format!("    {url}"));
            }
            lines.push(format!("    avatar: {}", user.avatar_url));
            if let Some(xp) = user.total_xp.filter(|xp| *xp > 0) {
                lines.push(format!("    {} XP", format_thousands(xp)));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Render`] if serialisation fails.
pub fn render_json(view: &ReportView) -> Result<String, CliError> {
    serde_json::to_string_pretty(view).map_err(|error| CliError::render(error.to_string()))
}
