use std::path::{Path, PathBuf};

use crate::shared::constants::{CASCADE_DIR_ENV, SYSTEM_CASCADE_DIRS};
use crate::shared::error::InitError;

/// Locates a cascade definition file on disk.
///
/// Resolution order:
/// 1. Explicit path, if given (no fallback when it is missing)
/// 2. `$FACECAM_CASCADE_DIR`
/// 3. User data directory (`~/.local/share/facecam/cascades` on Linux)
/// 4. Directories where OpenCV packages install their Haar cascades
pub struct CascadeResolver {
    search_dirs: Vec<PathBuf>,
}

impl CascadeResolver {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Builds the default search list from the environment and platform.
    pub fn from_environment() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(dir) = std::env::var_os(CASCADE_DIR_ENV) {
            search_dirs.push(PathBuf::from(dir));
        }
        if let Some(data) = dirs::data_dir() {
            search_dirs.push(data.join("facecam").join("cascades"));
        }
        search_dirs.extend(SYSTEM_CASCADE_DIRS.iter().map(PathBuf::from));
        Self::new(search_dirs)
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    pub fn resolve(&self, name: &str, explicit: Option<&Path>) -> Result<PathBuf, InitError> {
        if let Some(path) = explicit {
            return if path.is_file() {
                Ok(path.to_path_buf())
            } else {
                Err(InitError::ClassifierNotFound {
                    name: name.to_string(),
                    searched: path.display().to_string(),
                })
            };
        }

        if let Some(found) = self
            .search_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            log::debug!("Resolved cascade {name} at {}", found.display());
            return Ok(found);
        }

        let searched = self
            .search_dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(InitError::ClassifierNotFound {
            name: name.to_string(),
            searched,
        })
    }
}
