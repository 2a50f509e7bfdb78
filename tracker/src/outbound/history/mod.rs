//! File-backed history of the last tracked username.

mod atomic_write;
mod file_store;

pub use file_store::{FileLastUsernameStore, LAST_USERNAME_FILE};
