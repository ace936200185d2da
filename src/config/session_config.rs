use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the client-side session persistence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SessionConfig {
    /// Path to the file that keeps the session token and cached user profile. If not specified,
    /// the file is kept in the project data directory.
    pub path: Option<PathBuf>,
}
