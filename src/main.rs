//! # update_registry
//!
//! Writes release checksums into a JSON extension registry.
//!
//! ```bash
//! sha256sum dist/* | sed 's#dist/##' > checksums.txt
//! update_registry checksums.txt registry.json 1.2.0
//!
//! # CI gate: fail when the registry lags behind the release
//! update_registry --check checksums.txt registry.json 1.2.0
//! ```

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use std::io::{self, Write};
use update_registry::{constants::USAGE, logging, update, Cli};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{USAGE}");
                std::process::exit(1);
            }
        },
    };
    logging::init_logging();

    let mut stdout = io::stdout().lock();
    let outcome = update::run(
        &cli.checksums_file,
        &cli.registry_file,
        &cli.target_version,
        cli.mode(),
        &mut stdout,
    )?;
    stdout.flush()?;

    if cli.mode() == update::Mode::Check && !outcome.is_up_to_date() {
        std::process::exit(1);
    }
    Ok(())
}
