// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`MODEL_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The export directory follows a shorter chain: the configured directory,
//! then the platform download directory, then the current directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ModelLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MODEL_LENS_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored and reported
/// as `false`.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path with an optional override.
///
/// Without an override this is `ModelLens/` under the platform config
/// directory (`~/.config` on Linux). Returns `None` if no directory can be
/// determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory receiving exports, screenshots and gallery downloads.
pub fn get_export_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_override_wins() {
        let path = PathBuf::from("/tmp/model-lens-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn explicit_export_override_wins() {
        let path = PathBuf::from("/tmp/model-lens-exports");
        assert_eq!(get_export_dir_with_override(Some(path.clone())), path);
    }

    #[test]
    fn export_dir_never_empty() {
        let dir = get_export_dir_with_override(None);
        assert!(!dir.as_os_str().is_empty());
    }
}
