use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use tracker_common::{init_logging, ConfigFile};
use tracker_engine::Config;
use trackerctl::{run_tracker, show_config, show_map, show_status, Opts, SubCommand};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging early
    //
    init_logging(NAME, opts.debug, opts.log_dir.clone())?;
    trace!("Logging initialised.");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let res = rt.block_on(handle_subcmd(&opts));

    // Reading stdin can not be cancelled, do not wait for it.
    //
    rt.shutdown_background();
    res
}

async fn handle_subcmd(opts: &Opts) -> Result<()> {
    let cfg = ConfigFile::<Config>::load(opts.config.as_deref())?;
    cfg.inner().validate()?;

    match &opts.subcmd {
        // Handle `run`
        //
        SubCommand::Run(ropts) => {
            trace!("run");

            banner()?;
            let mut stdout = io::stdout();
            let last = run_tracker(cfg.inner(), ropts, &mut stdout).await?;
            info!("final location {}", last.coordinate);
            eprintln!("Stopped after {} updates.", last.updates);
        }

        // Handle `status`
        //
        SubCommand::Status(vopts) => {
            trace!("status");

            println!("{}", show_status(cfg.inner(), vopts)?);
        }

        // Handle `map`
        //
        SubCommand::Map(vopts) => {
            trace!("map");

            println!("{}", show_map(cfg.inner(), vopts)?);
        }

        // Handle `config`
        //
        SubCommand::Config => {
            trace!("config");

            println!("{}", show_config(&cfg)?);
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            println!("{}", version());
            println!("Modules: ");
            println!("\t{}", tracker_common::version());
            println!("\t{}", tracker_engine::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
