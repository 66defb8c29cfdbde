use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fq_core::entities::AuthoringSession;

use crate::error::SessionError;

const APP_DIR_NAME: &str = "factquiz";
const SESSION_FILE_NAME: &str = "session.json";

/// JSON-file store for the authoring session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `explicit` when given, otherwise `<data_dir>/factquiz/session.json`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDataDir` if no path is given and the platform
    /// has no data directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, SessionError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        dirs::data_dir()
            .map(|dir| Self::new(dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or(SessionError::NoDataDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session for the builder stage.
    ///
    /// # Errors
    ///
    /// `Missing` when no session was written, `Malformed` when the file does
    /// not hold a valid session (empty, non-numeric, negative count, ...).
    pub fn load(&self) -> Result<AuthoringSession, SessionError> {
        self.peek()?.ok_or_else(|| SessionError::Missing {
            path: self.path.clone(),
        })
    }

    /// Like [`Self::load`], but a missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` or `Io` for a file that exists but cannot be used.
    pub fn peek(&self) -> Result<Option<AuthoringSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SessionError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }

    /// Write the session, replacing any previous one.
    ///
    /// The file is written next to its final location and renamed into place.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the directory or file cannot be written.
    pub fn store(&self, session: &AuthoringSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let body = serde_json::to_string_pretty(session).map_err(|e| SessionError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        let io_err = |source| SessionError::Io {
            path: tmp.clone(),
            source,
        };

        // A leftover temp file may carry looser permissions; start fresh.
        match fs::remove_file(&tmp) {
            Ok(()) => tracing::debug!(path = %tmp.display(), "removed stale session temp file"),
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(io_err(source)),
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&tmp).map_err(io_err)?;
        file.write_all(body.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            fact_id = session.fact_id,
            question_count = session.question_count,
            "authoring session stored"
        );
        Ok(())
    }

    /// Write a new session unless one is already pending.
    ///
    /// With `force`, a pending session is abandoned (and logged). An
    /// unreadable file counts as nothing pending.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Pending` when a session exists and `force` is
    /// false, or `Io` on write failure.
    pub fn begin(&self, session: &AuthoringSession, force: bool) -> Result<(), SessionError> {
        match self.peek() {
            Ok(Some(pending)) if !force => {
                return Err(SessionError::Pending {
                    fact_id: pending.fact_id,
                });
            }
            Ok(Some(pending)) => {
                tracing::warn!(fact_id = pending.fact_id, "abandoning pending authoring session");
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, "overwriting unreadable authoring session");
            }
        }
        self.store(session)
    }

    /// Ensure no session is pending, without writing anything.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Pending` when a readable session exists and
    /// `force` is false.
    pub fn ensure_idle(&self, force: bool) -> Result<(), SessionError> {
        match self.peek() {
            Ok(Some(pending)) if !force => Err(SessionError::Pending {
                fact_id: pending.fact_id,
            }),
            _ => Ok(()),
        }
    }

    /// Delete the session only if it still belongs to `fact_id`.
    ///
    /// A session started for another fact in the meantime is left alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file cannot be read or removed.
    pub fn clear_if(&self, fact_id: i64) -> Result<bool, SessionError> {
        match self.peek() {
            Ok(Some(current)) if current.fact_id == fact_id => self.clear(),
            Ok(Some(current)) => {
                tracing::debug!(
                    expected = fact_id,
                    found = current.fact_id,
                    "session belongs to another fact; keeping it"
                );
                Ok(false)
            }
            Ok(None) | Err(SessionError::Malformed { .. }) => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Delete the session file. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
