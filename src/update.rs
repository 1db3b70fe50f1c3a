use crate::{checksums::ChecksumMap, registry::Registry};
use anyhow::Result;
use std::{io::Write, path::Path};

/// Whether a run persists its changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite the registry file when any artifact matched
    Write,
    /// Report staleness only; the registry file is never touched
    Check,
}

/// What a run did to the registry
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub versions_matched: usize,
    /// Artifacts whose filename was found in the checksum map
    pub artifacts_updated: usize,
    /// Subset of `artifacts_updated` whose value actually differed
    pub artifacts_changed: usize,
    pub checksums_missing: usize,
    pub written: bool,
}

impl UpdateOutcome {
    pub fn is_up_to_date(&self) -> bool {
        self.artifacts_changed == 0
    }
}

/// Load both files, apply the checksums for `version` and persist per `mode`
pub fn run(
    checksums_file: &Path,
    registry_file: &Path,
    version: &str,
    mode: Mode,
    out: &mut impl Write,
) -> Result<UpdateOutcome> {
    let checksums = ChecksumMap::load(checksums_file)?;
    let mut registry = Registry::load(registry_file)?;
    let mut outcome = apply(&checksums, &mut registry, version, out)?;

    match mode {
        Mode::Write => {
            if outcome.artifacts_updated > 0 {
                registry.save(registry_file)?;
                outcome.written = true;
                writeln!(out, "Registry updated successfully.")?;
            } else {
                writeln!(out, "No updates made.")?;
            }
        }
        Mode::Check => {
            if outcome.is_up_to_date() {
                writeln!(out, "Registry is up to date.")?;
            } else {
                writeln!(out, "Registry is out of date for version {version}.")?;
            }
        }
    }

    tracing::debug!(?outcome, "run finished");
    Ok(outcome)
}

/// Overwrite `checksum.value` of every artifact under `version` whose filename
/// appears in `checksums`. Progress and warnings go to `out`.
pub fn apply(
    checksums: &ChecksumMap,
    registry: &mut Registry,
    version: &str,
    out: &mut impl Write,
) -> Result<UpdateOutcome> {
    let mut outcome = UpdateOutcome::default();

    for mut entry in registry.versions_mut(version)? {
        outcome.versions_matched += 1;
        writeln!(out, "Updating version {version}")?;
        tracing::debug!(location = entry.location(), "matched version");

        for mut artifact in entry.artifacts_mut()? {
            let filename = artifact.filename()?.to_string();
            let platform = artifact.platform().to_string();
            match checksums.get(&filename) {
                Some(checksum) => {
                    writeln!(out, "  Updating {platform} ({filename})")?;
                    if artifact.checksum_value() != Some(checksum) {
                        outcome.artifacts_changed += 1;
                    }
                    artifact.set_checksum_value(checksum)?;
                    outcome.artifacts_updated += 1;
                }
                None => {
                    writeln!(
                        out,
                        "  Warning: Checksum not found for {platform} ({filename})"
                    )?;
                    tracing::debug!(%platform, %filename, "no checksum for artifact");
                    outcome.checksums_missing += 1;
                }
            }
        }
    }

    Ok(outcome)
}
