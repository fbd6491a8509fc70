//! Module describing all possible commands and sub-commands to the `trackerctl` main driver
//!
//! The main command is `run`: it starts the simulated tracker, prints every change and lets
//! the operator toggle the alert mode by pressing Enter (`q` to quit).
//!
//! `status` and `map` render the initial view without starting anything, `config` shows what
//! configuration is in use.
//!
//! `completion` is here just to configure the various shells completion system.
//!

use std::path::PathBuf;
use std::time::Duration;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// debug mode, hierarchical traces.
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Also log into hourly files in this directory.
    #[clap(short = 'L', long)]
    pub log_dir: Option<PathBuf>,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `config`
/// `map [--alert] [--json]`
/// `run [--alert] [--json] [--ticks N] [--interval DURATION] [--seed N]`
/// `status [--alert] [--json]`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Show the configuration in use
    Config,
    /// Describe the map view
    Map(ViewOpts),
    /// Start tracking
    Run(RunOpts),
    /// Show the initial status panel
    Status(ViewOpts),
    /// List all package versions.
    Version,
}

// ------

/// Options for `run`.
///
#[derive(Debug, Parser)]
pub struct RunOpts {
    /// Start in alert mode.
    #[clap(short = 'A', long)]
    pub alert: bool,
    /// Override the update interval ("3s", "500ms"…).
    #[clap(short = 'i', long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,
    /// One JSON object per line instead of text.
    #[clap(short = 'J', long)]
    pub json: bool,
    /// Seed for the random jitter.
    #[clap(short = 's', long)]
    pub seed: Option<u64>,
    /// Stop after that many updates.
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,
}

/// Options for `status` and `map`.
///
#[derive(Debug, Parser)]
pub struct ViewOpts {
    /// Show the alert mode variant.
    #[clap(short = 'A', long)]
    pub alert: bool,
    /// JSON output.
    #[clap(short = 'J', long)]
    pub json: bool,
}

/// Options for completion
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}
