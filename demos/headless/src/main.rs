//! headless — command-line front end for the dream story life simulation.
//!
//! ```text
//! headless batch --player greedy --ticks 20160 --output output/greedy
//! headless --tick-ms 50 live
//! ```

mod args;
mod batch;
mod config;
mod live;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Mode};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = config::resolve(&cli)?;

    match &cli.mode {
        Mode::Batch(args) => batch::main(config, args),
        Mode::Live => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(live::main(config))
        }
    }
}
