//! Authoring-session storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Path of the session file. Empty means `<data_dir>/factquiz/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// The configured path, if one was set.
    #[must_use]
    pub fn explicit_path(&self) -> Option<PathBuf> {
        (!self.path.trim().is_empty()).then(|| PathBuf::from(&self.path))
    }
}
