//! Session credentials attached to every Duolingo request.
//!
//! The service authenticates with the browser session of a logged-in user.
//! Outside a browser the session is injected: either the raw `Cookie` header
//! value or the `jwt_token` sent as a bearer token.

use std::fmt;

use reqwest::RequestBuilder;
use reqwest::header::COOKIE;
use zeroize::Zeroizing;

/// Session material reused from an authenticated Duolingo session.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionCredentials {
    /// Raw `Cookie` header value, e.g. `jwt_token=...`.
    Cookie(Zeroizing<String>),
    /// JWT sent as `Authorization: Bearer <token>`.
    Bearer(Zeroizing<String>),
}

impl SessionCredentials {
    /// Wrap a raw cookie header value.
    pub fn cookie(value: impl Into<String>) -> Self {
        Self::Cookie(Zeroizing::new(value.into()))
    }

    /// Wrap a JWT for bearer authentication.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(Zeroizing::new(token.into()))
    }

    pub(super) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Cookie(value) => request.header(COOKIE, value.as_str()),
            Self::Bearer(token) => request.bearer_auth(token.as_str()),
        }
    }

    /// Credential kind for diagnostics: `"cookie"` or `"bearer"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cookie(_) => "cookie",
            Self::Bearer(_) => "bearer",
        }
    }
}

impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionCredentials::{}(<redacted>)", self.kind())
    }
}

/// Supplies the session context for outbound requests.
pub trait CredentialProvider: Send + Sync {
    /// Current credentials, or `None` to send the request anonymously.
    fn credentials(&self) -> Option<SessionCredentials>;
}

/// Provider returning the same credentials for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    credentials: Option<SessionCredentials>,
}

impl StaticCredentialProvider {
    /// Provider that always returns `credentials`.
    pub const fn new(credentials: SessionCredentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// Provider that sends no credentials.
    pub const fn anonymous() -> Self {
        Self { credentials: None }
    }

    /// Pick credentials from optional settings; the cookie wins over the JWT.
    pub fn from_parts(cookie: Option<&str>, jwt: Option<&str>) -> Self {
        let non_blank = |value: &&str| !value.trim().is_empty();
        let credentials = cookie
            .filter(non_blank)
            .map(SessionCredentials::cookie)
            .or_else(|| jwt.filter(non_blank).map(SessionCredentials::bearer));
        Self { credentials }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credentials(&self) -> Option<SessionCredentials> {
        self.credentials.clone()
    }
}

#[cfg(test)]
mod tests {
    //! Credential selection and redaction.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::cookie_only(Some("jwt_token=abc"), None, Some(SessionCredentials::cookie("jwt_token=abc")))]
    #[case::jwt_only(None, Some("abc"), Some(SessionCredentials::bearer("abc")))]
    #[case::cookie_wins(Some("jwt_token=abc"), Some("xyz"), Some(SessionCredentials::cookie("jwt_token=abc")))]
    #[case::blank_cookie_falls_back(Some("  "), Some("xyz"), Some(SessionCredentials::bearer("xyz")))]
    #[case::nothing(None, None, None)]
    fn from_parts_selects_credentials(
        #[case] cookie: Option<&str>,
        #[case] jwt: Option<&str>,
        #[case] expected: Option<SessionCredentials>,
    ) {
        let provider = StaticCredentialProvider::from_parts(cookie, jwt);
        assert_eq!(provider.credentials(), expected);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let rendered = format!("{:?}", SessionCredentials::bearer("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("bearer"));
    }

    #[test]
    fn anonymous_provider_sends_nothing() {
        assert!(StaticCredentialProvider::anonymous().credentials().is_none());
    }
}
