//! Configuration constants and utilities for mvckit
//!
//! Environment lookups used by the demo binary. The library core itself reads
//! no configuration.

/// Environment variable holding the tracing filter, e.g. `debug` or `mvckit=trace`
pub const LOG_LEVEL_ENV_VAR: &str = "MVCKIT_LOG_LEVEL";

/// Environment variable naming an event script to replay when no CLI source is given
pub const SCRIPT_PATH_ENV_VAR: &str = "MVCKIT_SCRIPT_PATH";

/// Event code that makes the demo quit
pub const DEFAULT_QUIT_EVENT: i32 = 27;

/// Get the script path from the environment, with `~` and `$VAR` expanded
///
/// Returns `None` when the variable is unset, empty, or cannot be expanded.
pub fn get_script_path() -> Option<String> {
    let raw = std::env::var_os(SCRIPT_PATH_ENV_VAR).and_then(|val| val.into_string().ok())?;
    if raw.trim().is_empty() {
        return None;
    }
    expand_path(&raw)
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(path: &str) -> Option<String> {
    match shellexpand::full(path) {
        Ok(expanded) => Some(expanded.into_owned()),
        Err(e) => {
            tracing::warn!("Failed to expand path '{}': {}", path, e);
            None
        }
    }
}
