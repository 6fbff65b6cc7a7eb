use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::CatalogError;

static LOG_FILENAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<channel>.+)_(?P<date>\d{8})\.log$").unwrap());

/// One discovered log file: a (channel, date) pair derived from the filename
/// plus the path it was found at.
///
/// Identity and ordering are `(date, channel)` only. Two values discovered
/// from different scans compare equal when their filename-derived parts
/// match, even if the paths differ.
#[derive(Debug, Clone, Serialize)]
pub struct LogFile {
    pub channel: String,
    pub date: NaiveDate,
    pub path: PathBuf,
}

impl LogFile {
    /// Derives a `LogFile` from a path whose filename matches
    /// `<channel>_<YYYYMMDD>.log`.
    ///
    /// The channel is the longest prefix before the date suffix, so channel
    /// names containing underscores parse correctly. Fails with
    /// [`CatalogError::InvalidFilename`] on a pattern mismatch or an
    /// impossible calendar date; directory scans skip such entries rather
    /// than abort.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<LogFile, CatalogError> {
        let path = path.into();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CatalogError::InvalidFilename(path.display().to_string()))?;

        let captures = LOG_FILENAME_PATTERN
            .captures(filename)
            .ok_or_else(|| CatalogError::InvalidFilename(filename.to_owned()))?;

        let channel = captures["channel"].to_owned();
        let date = NaiveDate::parse_from_str(&captures["date"], "%Y%m%d")
            .map_err(|_| CatalogError::InvalidFilename(filename.to_owned()))?;

        Ok(LogFile { channel, date, path })
    }

    /// Reads the whole file, replacing invalid UTF-8 instead of failing.
    ///
    /// Logs are historical artifacts and may contain stray bytes from
    /// clients with broken encodings. The handle is released before this
    /// returns, on every path.
    pub fn read_lossy(&self) -> io::Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl PartialEq for LogFile {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.channel == other.channel
    }
}

impl Eq for LogFile {}

impl Ord for LogFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.channel.cmp(&other.channel))
    }
}

impl PartialOrd for LogFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
