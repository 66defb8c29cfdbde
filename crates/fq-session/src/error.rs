use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no authoring session at {}; run `fq fact create` first", .path.display())]
    Missing { path: PathBuf },

    #[error("authoring session at {} is unreadable ({reason}); run `fq session clear` and `fq fact create` again", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("a session for fact {fact_id} is still pending; submit its questions or pass --force")]
    Pending { fact_id: i64 },

    #[error("data directory not found; set session.path in config")]
    NoDataDir,

    #[error("session store I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
