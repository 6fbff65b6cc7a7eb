//! Read-through catalog of the log files a ZNC bouncer leaves on disk.
//!
//! A ZNC directory stores one append-only log file per (user, channel, day):
//!
//! ```text
//! <znc root>/users/<user>/moddata/log/<channel>_<YYYYMMDD>.log
//! ```
//!
//! [`UserIndex`] is built once from the root and maps user identifiers to
//! their [`LogCatalog`]. A catalog answers discovery and lookup queries with
//! [`LogFile`] handles; the files themselves stay owned by the filesystem
//! and are re-discovered on every query, so there is nothing to invalidate
//! and concurrent readers need no locking.
//!
//! Entries that do not look like log files are skipped with a warning, never
//! surfaced as errors; a user without a log directory simply has no logs.

use std::path::PathBuf;

use thiserror::Error;

pub mod catalog;
pub mod dates;
pub mod index;
pub mod logfile;

pub use catalog::LogCatalog;
pub use index::UserIndex;
pub use logfile::LogFile;

/// Errors surfaced by index construction and catalog queries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Fatal at startup: the configured root does not exist.
    #[error("no ZNC directory found at {}", .0.display())]
    RootNotFound(PathBuf),

    /// Fatal at startup: the root has no `users` subdirectory.
    #[error("no users directory found in {}", .0.display())]
    UsersDirNotFound(PathBuf),

    /// The requested user identifier has no directory.
    #[error("no user directory found for user {user:?} in {}", .users_path.display())]
    UserNotFound { user: String, users_path: PathBuf },

    /// A directory entry does not match the `<channel>_<YYYYMMDD>.log`
    /// pattern. Recovered locally during scans: the entry is skipped.
    #[error("log filename {0:?} has an unsupported format")]
    InvalidFilename(String),

    /// A filter query with no criteria at all.
    #[error("neither date nor channel were specified")]
    InvalidQuery,
}
