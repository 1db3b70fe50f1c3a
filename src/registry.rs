//! Extension registry document
//!
//! The registry is a JSON object shaped like:
//!
//! ```json
//! {
//!   "extensions": [
//!     {
//!       "id": "my.extension",
//!       "versions": [
//!         {
//!           "version": "1.2.0",
//!           "artifacts": {
//!             "linux/amd64": {
//!               "url": "https://example.com/releases/app-linux.tar.gz",
//!               "checksum": { "algorithm": "sha256", "value": "..." }
//!             }
//!           }
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Only the fields needed to locate artifacts are interpreted. Everything else
//! is carried through untouched, in its original key order.

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use std::{fs, path::Path};

pub struct Registry {
    doc: Value,
}

impl Registry {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading registry {}", path.display()))?;
        let registry = Self::parse(&data)
            .with_context(|| format!("parsing registry {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded registry");
        Ok(registry)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(data)?;
        if !doc.is_object() {
            bail!("registry root must be a JSON object");
        }
        Ok(Registry { doc })
    }

    /// Render with 2-space indentation and a single trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.doc)?;
        out.push('\n');
        Ok(out)
    }

    /// Overwrite `path` with the rendered document
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_pretty_string()?;
        fs::write(path, data).with_context(|| format!("writing registry {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved registry");
        Ok(())
    }

    /// Every version entry, across all extensions, whose `version` equals `version`
    pub fn versions_mut(&mut self, version: &str) -> Result<Vec<VersionEntry<'_>>> {
        let mut matched = Vec::new();
        let Some(extensions) = self.doc.get_mut("extensions") else {
            return Ok(matched);
        };
        let extensions = extensions
            .as_array_mut()
            .ok_or_else(|| anyhow!("`extensions` must be an array"))?;

        for (ext_idx, extension) in extensions.iter_mut().enumerate() {
            let extension = extension
                .as_object_mut()
                .ok_or_else(|| anyhow!("extensions[{ext_idx}] must be an object"))?;
            let Some(versions) = extension.get_mut("versions") else {
                continue;
            };
            let versions = versions
                .as_array_mut()
                .ok_or_else(|| anyhow!("extensions[{ext_idx}].versions must be an array"))?;

            for (ver_idx, entry) in versions.iter_mut().enumerate() {
                let location = format!("extensions[{ext_idx}].versions[{ver_idx}]");
                let entry = entry
                    .as_object_mut()
                    .ok_or_else(|| anyhow!("{location} must be an object"))?;
                let is_match = entry
                    .get("version")
                    .ok_or_else(|| anyhow!("{location} has no `version` field"))?
                    .as_str()
                    == Some(version);
                if is_match {
                    matched.push(VersionEntry { location, entry });
                }
            }
        }
        Ok(matched)
    }
}

/// A single version object inside an extension
pub struct VersionEntry<'a> {
    location: String,
    entry: &'a mut Map<String, Value>,
}

impl VersionEntry<'_> {
    /// Path of this entry inside the document, e.g. `extensions[0].versions[2]`
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Artifacts keyed by platform, in document order
    pub fn artifacts_mut(&mut self) -> Result<Vec<ArtifactEntry<'_>>> {
        let location = &self.location;
        let Some(artifacts) = self.entry.get_mut("artifacts") else {
            return Ok(Vec::new());
        };
        let artifacts = artifacts
            .as_object_mut()
            .ok_or_else(|| anyhow!("{location}.artifacts must be an object"))?;

        let mut entries = Vec::with_capacity(artifacts.len());
        for (platform, artifact) in artifacts.iter_mut() {
            let artifact_location = format!("{location}.artifacts[{platform:?}]");
            let artifact = artifact
                .as_object_mut()
                .ok_or_else(|| anyhow!("{artifact_location} must be an object"))?;
            entries.push(ArtifactEntry {
                location: artifact_location,
                platform,
                artifact,
            });
        }
        Ok(entries)
    }
}

/// One platform's download inside a version
pub struct ArtifactEntry<'a> {
    location: String,
    platform: &'a str,
    artifact: &'a mut Map<String, Value>,
}

impl ArtifactEntry<'_> {
    pub fn platform(&self) -> &str {
        self.platform
    }

    pub fn url(&self) -> Result<&str> {
        self.artifact
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("{} has no string `url`", self.location))
    }

    /// Filename the artifact downloads as, taken from its URL
    pub fn filename(&self) -> Result<&str> {
        Ok(artifact_filename(self.url()?))
    }

    pub fn checksum_value(&self) -> Option<&str> {
        self.artifact.get("checksum")?.get("value")?.as_str()
    }

    /// Replace `checksum.value`, leaving sibling fields such as `algorithm` alone
    pub fn set_checksum_value(&mut self, value: &str) -> Result<()> {
        let checksum = self
            .artifact
            .get_mut("checksum")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| anyhow!("{} has no `checksum` object", self.location))?;
        checksum.insert("value".to_string(), Value::String(value.to_string()));
        Ok(())
    }
}

/// Last `/`-separated segment of a URL
pub fn artifact_filename(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}
