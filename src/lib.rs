//! # update-registry
//!
//! Core library for the `update_registry` maintenance tool, which writes
//! release checksums into a JSON extension registry.

use clap::Parser;
use std::path::PathBuf;

pub mod checksums;
pub mod constants;
pub mod logging;
pub mod registry;
pub mod update;

/// Update artifact checksums in an extension registry for one version
///
/// Reads `<checksum> <filename>` lines from the checksums file and writes each
/// checksum into the artifacts of the matching registry version whose URL ends
/// with that filename.
#[derive(Parser, Debug)]
#[command(
    name = constants::BIN_NAME,
    version,
    about = "Update artifact checksums in a JSON extension registry for a given version"
)]
pub struct Cli {
    /// Text file with one `<checksum> <filename>` pair per line
    pub checksums_file: PathBuf,
    /// Registry JSON file to update in place
    pub registry_file: PathBuf,
    /// Version to update; must equal a `version` field exactly
    #[arg(id = "target_version", value_name = "version")]
    pub target_version: String,
    /// Do not write; exit 1 if the registry does not carry these checksums
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn mode(&self) -> update::Mode {
        if self.check {
            update::Mode::Check
        } else {
            update::Mode::Write
        }
    }
}
