//! This is the module handling the `config` sub-command.
//!

use eyre::Result;

use tracker_common::ConfigFile;
use tracker_engine::Config;

/// Where the configuration comes from and what is in it.
///
pub fn show_config(cfg: &ConfigFile<Config>) -> Result<String> {
    let source = match cfg.source() {
        Some(path) => path.display().to_string(),
        None => format!("built-in defaults ({} not found)", cfg.default_file().display()),
    };
    let data = serde_json::to_string_pretty(cfg.inner())?;
    Ok(format!("Configuration from {source}:\n{data}"))
}
