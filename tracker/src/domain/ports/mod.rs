//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod last_username_store;
mod social_graph_source;

#[cfg(test)]
pub use last_username_store::MockLastUsernameStore;
pub use last_username_store::{LastUsernameStore, LastUsernameStoreError, NoopLastUsernameStore};
#[cfg(test)]
pub use social_graph_source::MockSocialGraphSource;
pub use social_graph_source::{SocialGraphSource, SocialGraphSourceError};
