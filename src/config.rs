use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::errors::{Error, Result};

/// Overrides the platform data directory, e.g. for portable installs or tests
pub const DATA_DIR_ENV: &str = "HYDRATION_TRACKER_DATA_DIR";

/// Where the tracker keeps its data and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl TrackerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();

        Self {
            log_dir: data_dir.join("logs"),
            data_dir,
        }
    }

    /// `$HYDRATION_TRACKER_DATA_DIR` if set, the platform data directory otherwise.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            return Ok(Self::new(dir));
        }

        let project_dir = ProjectDirs::from("fyi", "angelo", "hydration-tracker").ok_or_else(|| {
            Error::Config("unable to determine a home directory for app data".into())
        })?;

        Ok(Self::new(project_dir.data_dir()))
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.log_dir] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::Config(format!("unable to create {}: {e}", dir.display())))
}
