//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default location for the configuration file of
//! `moto-tracker`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or use the defaults.
//!
//! This encapsulates the configuration, available with `.inner()` or `.inner_mut()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::makepath;

/// Config filename
pub const CONFIG: &str = "tracker.hcl";

/// Main name for the directory base
pub const TAG: &str = "moto-tracker";

/// Anything stored on disk must carry a version number.
///
pub trait Versioned {
    /// Version this code understands
    const CVERSION: usize;

    /// Version found in the data
    fn version(&self) -> usize;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bad config file version v{0}, need v{1}")]
    BadFileVersion(usize, usize),
    #[error("Can not parse {0}: {1}")]
    Parse(String, String),
    #[error("Can not read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown config file {0}")]
    UnknownFile(String),
}

/// Generic configuration holder.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + Default + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    /// File the configuration came from, `None` means built-in defaults.
    source: Option<PathBuf>,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let basedir: PathBuf = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                makepath!(base, tag)
            }
            None => {
                warn!("No home directory, using current one");
                makepath!(".", tag)
            }
        };
        debug!("base = {basedir:?}");

        ConfigFile {
            tag: String::from(tag),
            basedir,
            source: None,
            inner: T::default(),
        }
    }

    /// Returns the project tag
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.config_path().join(CONFIG)
    }

    /// Where did we load the configuration from?
    ///
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI, it must exist
    /// - default basedir (base on $HOME or $LOCALAPPDATA), defaults are used if not there
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile<T>, ConfigError> {
        let mut cfg = ConfigFile::<T>::new(TAG);

        let fname = match fname {
            Some(fname) => {
                if !fname.exists() {
                    return Err(ConfigError::UnknownFile(fname.display().to_string()));
                }
                fname.to_path_buf()
            }
            None => {
                let def = cfg.default_file();
                if !def.exists() {
                    debug!("no {def:?}, using defaults");
                    return Ok(cfg);
                }
                def
            }
        };

        trace!("Loading config file {fname:?}");
        cfg.inner = Self::read_file(&fname)?;
        cfg.source = Some(fname);
        Ok(cfg)
    }

    /// Parse one file and check its version.
    ///
    fn read_file(fname: &Path) -> Result<T, ConfigError> {
        let name = fname.display().to_string();

        let data = fs::read_to_string(fname).map_err(|source| ConfigError::Read {
            path: name.clone(),
            source,
        })?;
        let data: T = hcl::from_str(&data).map_err(|e| ConfigError::Parse(name, e.to_string()))?;
        debug!("struct data = {data:?}");

        if data.version() != T::CVERSION {
            return Err(ConfigError::BadFileVersion(data.version(), T::CVERSION));
        }
        Ok(data)
    }

    /// Return the inner configuration
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Return the inner configuration as mutable
    ///
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the holder
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}
