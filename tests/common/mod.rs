use std::{fs, path::PathBuf};
use tempfile::TempDir;

pub const REGISTRY: &str = r#"{
  "schemaVersion": "1.0",
  "extensions": [
    {
      "id": "demo.doctor",
      "namespace": "doctor",
      "displayName": "Doctor ✓",
      "versions": [
        {
          "version": "1.1.0",
          "artifacts": {
            "linux": {
              "entryPoint": "app",
              "url": "https://example.com/1.1.0/app-linux.tar.gz",
              "checksum": {
                "algorithm": "sha256",
                "value": "prev-linux"
              }
            }
          }
        },
        {
          "version": "1.2.0",
          "usage": "azd doctor <command>",
          "artifacts": {
            "linux": {
              "entryPoint": "app",
              "url": "https://example.com/1.2.0/app-linux.tar.gz",
              "checksum": {
                "algorithm": "sha256",
                "value": "old"
              }
            },
            "windows": {
              "entryPoint": "app.exe",
              "url": "https://example.com/1.2.0/app-windows.zip",
              "checksum": {
                "algorithm": "sha256",
                "value": "old-win"
              }
            }
          }
        }
      ]
    }
  ]
}
"#;

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
