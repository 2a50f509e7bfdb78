//! Driven port remembering the most recently tracked username.

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading or writing the stored username.
    pub enum LastUsernameStoreError {
        /// Storage could not be read or written.
        Io {
            /// I/O failure description.
            message: String,
        } => "last username storage failed: {message}",
    }
}

/// Port persisting the last username between runs.
#[cfg_attr(test, mockall::automock)]
pub trait LastUsernameStore: Send + Sync {
    /// Return the stored username, if any.
    fn load(&self) -> Result<Option<String>, LastUsernameStoreError>;

    /// Replace the stored username.
    fn save(&self, username: &str) -> Result<(), LastUsernameStoreError>;
}

/// Store that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLastUsernameStore;

impl LastUsernameStore for NoopLastUsernameStore {
    fn load(&self) -> Result<Option<String>, LastUsernameStoreError> {
        Ok(None)
    }

    fn save(&self, _username: &str) -> Result<(), LastUsernameStoreError> {
        Ok(())
    }
}
