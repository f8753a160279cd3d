//! Config file path resolution.

use std::path::{Path, PathBuf};

/// Environment variable naming a config file to use when none is given.
pub const CONFIG_ENV_VAR: &str = "CHROMA_CONFIG";

/// Resolve which config file to load.
///
/// Resolution order:
/// 1. explicit path (e.g. `--config`)
/// 2. `CHROMA_CONFIG` environment variable (ignored when empty)
/// 3. none: built-in defaults
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
