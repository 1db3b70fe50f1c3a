//! Parsing of checksum listings.
//!
//! A checksums file holds one artifact per line in the `<checksum> <filename>`
//! layout produced by tools such as `sha256sum`. Lines that do not split into
//! exactly two whitespace-separated tokens are skipped.

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

/// Filename to checksum lookup built from a checksums file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChecksumMap {
    entries: HashMap<String, String>,
}

impl ChecksumMap {
    /// Read and parse a checksums file
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading checksums from {}", path.display()))?;
        let map = Self::parse(&data);
        tracing::info!(
            path = %path.display(),
            entries = map.len(),
            "loaded checksums"
        );
        Ok(map)
    }

    /// Parse checksum listing text. Later lines win on duplicate filenames.
    pub fn parse(input: &str) -> Self {
        let mut entries = HashMap::new();
        for (idx, line) in input.lines().enumerate() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [checksum, filename] => {
                    entries.insert(filename.to_string(), checksum.to_string());
                }
                _ => {
                    tracing::debug!(line = idx + 1, tokens = parts.len(), "skipping checksum line");
                }
            }
        }
        ChecksumMap { entries }
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let map = ChecksumMap::parse(
            "abc123  app-linux.tar.gz\ndef456 app-darwin.zip\n\t789fff\tapp-windows.zip\n",
        );
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("app-linux.tar.gz"), Some("abc123"));
        assert_eq!(map.get("app-darwin.zip"), Some("def456"));
        assert_eq!(map.get("app-windows.zip"), Some("789fff"));
    }

    #[test]
    fn skips_lines_with_wrong_token_count() {
        let map = ChecksumMap::parse(
            "\n# comment line here\nlonely\nabc123 app.tar.gz\nabc *binary mode* extra\n",
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("app.tar.gz"), Some("abc123"));
        assert_eq!(map.get("lonely"), None);
    }

    #[test]
    fn last_duplicate_wins() {
        let map = ChecksumMap::parse("111 app.zip\n222 app.zip\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("app.zip"), Some("222"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let map = ChecksumMap::parse("abc app.zip\r\ndef other.zip\r\n");
        assert_eq!(map.get("app.zip"), Some("abc"));
        assert_eq!(map.get("other.zip"), Some("def"));
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(ChecksumMap::parse("").is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = ChecksumMap::load(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
