//! [`LastUsernameStore`] persisted as a single file in a state directory.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_write::replace_file;
use crate::domain::ports::{LastUsernameStore, LastUsernameStoreError};

/// File name holding the last tracked username.
pub const LAST_USERNAME_FILE: &str = "last_username";

/// Store writing the last username to `<state_dir>/last_username`.
///
/// The directory is created on first save. A missing directory or file reads
/// as "nothing stored".
#[derive(Debug, Clone)]
pub struct FileLastUsernameStore {
    state_dir: Utf8PathBuf,
}

impl FileLastUsernameStore {
    /// Build a store rooted at `state_dir`.
    pub fn new(state_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Directory holding the history file.
    pub fn state_dir(&self) -> &Utf8Path {
        &self.state_dir
    }

    fn io_error(&self, action: &str, err: &io::Error) -> LastUsernameStoreError {
        LastUsernameStoreError::io(format!(
            "failed to {action} {}/{LAST_USERNAME_FILE}: {err}",
            self.state_dir
        ))
    }
}

impl LastUsernameStore for FileLastUsernameStore {
    fn load(&self) -> Result<Option<String>, LastUsernameStoreError> {
        let dir = match Dir::open_ambient_dir(&self.state_dir, ambient_authority()) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error("open", &err)),
        };
        let contents = match dir.read_to_string(LAST_USERNAME_FILE) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error("read", &err)),
        };
        let username = contents.trim();
        Ok((!username.is_empty()).then(|| username.to_owned()))
    }

    fn save(&self, username: &str) -> Result<(), LastUsernameStoreError> {
        Dir::create_ambient_dir_all(&self.state_dir, ambient_authority())
            .map_err(|err| self.io_error("create directory for", &err))?;
        let dir = Dir::open_ambient_dir(&self.state_dir, ambient_authority())
            .map_err(|err| self.io_error("open", &err))?;
        replace_file(&dir, Utf8Path::new(LAST_USERNAME_FILE), username)
            .map_err(|err| self.io_error("write", &err))?;
        debug!(state_dir = %self.state_dir, "saved last username");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    fn store_in(temp: &TempDir, child: &str) -> FileLastUsernameStore {
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
        FileLastUsernameStore::new(root.join(child))
    }

    #[rstest]
    fn missing_directory_reads_as_empty(temp: TempDir) {
        let store = store_in(&temp, "never-created");

        assert_eq!(store.load().expect("load succeeds"), None);
    }

    #[rstest]
    fn save_creates_directory_and_round_trips(temp: TempDir) {
        let store = store_in(&temp, "state/nested");

        store.save("alice").expect("save succeeds");

        assert!(store.state_dir().as_std_path().is_dir());
        assert_eq!(store.load().expect("load succeeds").as_deref(), Some("alice"));
    }

    #[rstest]
    fn later_saves_replace_earlier_ones(temp: TempDir) {
        let store = store_in(&temp, "state");

        store.save("alice").expect("first save");
        store.save("bob").expect("second save");

        assert_eq!(store.load().expect("load succeeds").as_deref(), Some("bob"));
    }

    #[rstest]
    #[case::blank("   \n")]
    #[case::empty("")]
    fn blank_files_read_as_empty(temp: TempDir, #[case] contents: &str) {
        let store = store_in(&temp, "state");
        std::fs::create_dir_all(store.state_dir()).expect("create state dir");
        std::fs::write(store.state_dir().join(LAST_USERNAME_FILE), contents).expect("seed file");

        assert_eq!(store.load().expect("load succeeds"), None);
    }

    #[rstest]
    fn state_dir_that_is_a_file_fails_to_save(temp: TempDir) {
        let store = store_in(&temp, "occupied");
        std::fs::write(store.state_dir(), "not a directory").expect("seed file");

        let err = store.save("alice").expect_err("save fails");

        assert!(matches!(err, LastUsernameStoreError::Io { .. }));
    }
}
