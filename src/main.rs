//! # mvckit Main Entry Point
//!
//! Runs the counter demo on a scripted System and prints the final frame.

use anyhow::{anyhow, Result};
use mvckit::cmd_args::CommandLineArgs;
use mvckit::config::LOG_LEVEL_ENV_VAR;
use mvckit::demo::DemoApp;
use mvckit::Facade;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tracing::instrument]
fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.is_verbose())?;

    tracing::debug!(
        "Starting {} v{} with args: {:?}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        args
    );

    let mut app = DemoApp::from_args(&args)?;
    let mut facade: Facade<String> = Facade::new();
    facade.launch(&mut app)?;

    if let Some(system) = facade.system() {
        print!("{}", system.interface());
    }
    println!("frames drawn: {}", app.frames());
    Ok(())
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::from_env(LOG_LEVEL_ENV_VAR)
        .add_directive("tracing=warn".parse()?)
        .add_directive("tracing_subscriber=warn".parse()?);
    if verbose {
        filter = filter.add_directive(format!("{}=debug", env!("CARGO_CRATE_NAME")).parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
