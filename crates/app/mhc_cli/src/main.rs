// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use mhc_core::cards::sample_cards;
use mhc_core::catalog::Catalog;
use mhc_core::seed::Seed;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn load_catalog(args: &Cli) -> Result<Catalog> {
    let seed = Seed::load(args.catalog.as_deref())?;
    log::debug!("catalog loaded with {} records", seed.len());
    Ok(Catalog::new(seed))
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();
    let mut stdout = io::stdout().lock();

    match &args.command {
        Commands::Version => {
            writeln!(stdout, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        }
        Commands::List => commands::list(&load_catalog(&args)?, &mut stdout)?,
        Commands::Category { name } => {
            commands::category(&load_catalog(&args)?, name, &mut stdout)?
        }
        Commands::Get { id } => commands::get(&load_catalog(&args)?, id, &mut stdout)?,
        Commands::Cards => commands::cards(&sample_cards(), &mut stdout)?,
        Commands::Chat { delay_ms } => commands::chat(
            Duration::from_millis(*delay_ms),
            io::stdin().lock(),
            &mut stdout,
        )?,
    }

    Ok(())
}
