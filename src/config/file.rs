//! Configuration file source
//!
//! Optional TOML file supplying defaults below the command line, in the
//! same field names as the CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::PartialSettings;
use crate::error::{BarrelError, Result};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".barrelgen.toml";

/// TOML configuration file source
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    /// Source for the default configuration file location
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Source for an explicitly specified configuration file
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Whether the file exists at all
    pub fn is_available(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file into a settings overlay.
    pub fn load(&self) -> Result<PartialSettings> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| BarrelError::config_read(&self.path, e))?;
        toml::from_str(&content).map_err(|e| BarrelError::config_parse(&self.path, e))
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}
