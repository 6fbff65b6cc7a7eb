use std::fs;
use std::path::PathBuf;

use crate::catalog::LogCatalog;
use crate::CatalogError;

/// The mapping from user identifiers to their log catalogs.
///
/// Built once from a ZNC root directory at startup and read-only afterwards.
/// Each immediate child of `<root>/users` is a user identifier.
#[derive(Debug, Clone)]
pub struct UserIndex {
    users_path: PathBuf,
}

impl UserIndex {
    /// Opens the index rooted at a ZNC directory.
    ///
    /// Fails when the root does not exist or has no `users` subdirectory;
    /// both are configuration problems the process cannot recover from.
    pub fn open(znc_path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let znc_path = znc_path.into();
        if !znc_path.is_dir() {
            return Err(CatalogError::RootNotFound(znc_path));
        }

        let users_path = znc_path.join("users");
        if !users_path.is_dir() {
            return Err(CatalogError::UsersDirNotFound(users_path));
        }

        Ok(Self { users_path })
    }

    /// The catalog for one user, or [`CatalogError::UserNotFound`].
    pub fn lookup(&self, user: &str) -> Result<LogCatalog, CatalogError> {
        let user_path = self.users_path.join(user);
        if !user_path.is_dir() {
            return Err(CatalogError::UserNotFound {
                user: user.to_owned(),
                users_path: self.users_path.clone(),
            });
        }
        Ok(LogCatalog::for_user(&user_path))
    }

    /// All known user identifiers, sorted for stable output.
    pub fn users(&self) -> Vec<String> {
        let mut users = Vec::new();

        if let Ok(entries) = fs::read_dir(&self.users_path) {
            for entry in entries.flatten() {
                if !entry.path().is_dir() {
                    continue;
                }
                match entry.file_name().into_string() {
                    Ok(name) => users.push(name),
                    Err(name) => {
                        log::warn!("skipping undecodable user directory {name:?}");
                    }
                }
            }
        }

        users.sort();
        users
    }
}
