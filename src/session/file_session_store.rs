use crate::{
    directories::Directories,
    session::{SessionData, SessionStore},
};
use anyhow::Context;
use std::{fs, io::ErrorKind, path::PathBuf};

/// Name of the session file within the project data directory.
const SESSION_FILE_NAME: &str = "session.json";

/// Session store that keeps the session as a JSON file on disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the file at the specified path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by the file in the project data directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(
            Directories::ensure_data_dir_exists()?.join(SESSION_FILE_NAME),
        ))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> anyhow::Result<Option<SessionData>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Cannot read session file {:?}.", self.path));
            }
        };

        match serde_json::from_slice::<SessionData>(&content) {
            Ok(data) => Ok(Some(data)),
            Err(err) => {
                tracing::warn!(
                    "Session file {:?} is corrupted and will be ignored: {err}",
                    self.path
                );
                Ok(None)
            }
        }
    }

    fn save(&self, data: &SessionData) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            Directories::ensure_dir_exists(parent)?;
        }

        fs::write(&self.path, serde_json::to_vec_pretty(data)?)
            .with_context(|| format!("Cannot write session file {:?}.", self.path))
    }

    fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Cannot remove session file {:?}.", self.path))
            }
        }
    }
}
