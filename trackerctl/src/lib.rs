//! Library part of the `trackerctl` utility.
//!
//! Everything the sub-commands do lives here so it can be tested without going through the
//! binary; `main.rs` only parses options, sets up logging and loads the configuration.
//!

pub use cli::*;
pub use cmds::*;

mod cli;
mod cmds;
