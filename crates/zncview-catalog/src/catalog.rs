use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use walkdir::WalkDir;

use crate::logfile::LogFile;
use crate::CatalogError;

/// The queryable collection of one user's log files.
///
/// A catalog holds only the path of the user's log directory. Every query
/// re-scans the directory, so the answers track the filesystem and the
/// catalog itself carries no mutable state.
#[derive(Debug, Clone)]
pub struct LogCatalog {
    logs_path: PathBuf,
}

impl LogCatalog {
    pub(crate) fn for_user(user_path: &Path) -> Self {
        Self {
            logs_path: user_path.join("moddata").join("log"),
        }
    }

    /// The directory this catalog scans. It may not exist; such a catalog
    /// is simply empty.
    pub fn logs_path(&self) -> &Path {
        &self.logs_path
    }

    /// Every valid log file in the directory, in enumeration order.
    ///
    /// Entries with unrecognized filenames are skipped with a warning. A
    /// missing log directory yields no entries rather than an error.
    pub fn all(&self) -> Vec<LogFile> {
        let mut logs = Vec::new();

        for entry in WalkDir::new(&self.logs_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            match LogFile::from_path(entry.path()) {
                Ok(log_file) => logs.push(log_file),
                Err(err) => {
                    log::warn!("skipping entry in {}: {}", self.logs_path.display(), err);
                }
            }
        }

        logs
    }

    /// The log files matching a date, a channel, or both, sorted ascending
    /// by `(date, channel)`.
    ///
    /// At least one criterion is required. The sort is stable, so entries
    /// with equal `(date, channel)` keep their enumeration order and the
    /// first one encountered wins any downstream single-result lookup.
    pub fn filter(
        &self,
        date: Option<NaiveDate>,
        channel: Option<&str>,
    ) -> Result<Vec<LogFile>, CatalogError> {
        if date.is_none() && channel.is_none() {
            return Err(CatalogError::InvalidQuery);
        }

        let mut logs: Vec<LogFile> = self
            .all()
            .into_iter()
            .filter(|log| date.is_none_or(|d| log.date == d))
            .filter(|log| channel.is_none_or(|c| log.channel == c))
            .collect();
        logs.sort();
        Ok(logs)
    }

    /// The single log for a (date, channel) pair, if one exists.
    pub fn get(&self, date: NaiveDate, channel: &str) -> Option<LogFile> {
        self.filter(Some(date), Some(channel))
            .ok()?
            .into_iter()
            .next()
    }

    /// The closest same-channel log strictly before the given one, if any.
    pub fn earlier(&self, log: &LogFile) -> Option<LogFile> {
        self.all()
            .into_iter()
            .filter(|other| other.channel == log.channel && other.date < log.date)
            .max_by_key(|other| other.date)
    }

    /// The closest same-channel log strictly after the given one, if any.
    pub fn later(&self, log: &LogFile) -> Option<LogFile> {
        self.all()
            .into_iter()
            .filter(|other| other.channel == log.channel && other.date > log.date)
            .min_by_key(|other| other.date)
    }
}
