/// Binary name used in usage and help output
pub const BIN_NAME: &str = "update_registry";

/// Printed to stdout when the positional arguments are wrong
pub const USAGE: &str = "Usage: update_registry <checksums_file> <registry_file> <version>";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
