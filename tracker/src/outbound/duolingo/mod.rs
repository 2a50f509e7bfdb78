//! Duolingo outbound adapters.
//!
//! This module provides the reqwest transport, session credentials, and the
//! HTTP implementation of the `SocialGraphSource` port.

mod api_client;
mod credentials;
mod dto;
mod http_source;

pub use api_client::{DEFAULT_API_BASE, DuolingoApiClient};
pub use credentials::{CredentialProvider, SessionCredentials, StaticCredentialProvider};
pub use http_source::DuolingoSocialGraphSource;
