//! Shared library for the capsearch registry.
//!
//! The crate exposes the capability registry (category/service lookup and
//! name search), the content index it builds from installed files, and the
//! install-root resolution the `capsearch` binary relies on.

use std::env;
use std::env::VarError;
use std::path::PathBuf;

pub mod catalog;

pub use catalog::{
    CapabilityRegistry, Category, ContentIndex, IndexReport, Match, ReadFailure,
    ServiceDescriptor, ServiceKey,
};

/// Conventional install location for the registered services.
pub const DEFAULT_INSTALL_ROOT: &str = "/opt/mcp";

/// Environment variable that overrides the install root at runtime.
pub const ROOT_ENV: &str = "CAPSEARCH_ROOT";

fn root_from_hint(hint: &str) -> Option<PathBuf> {
    let trimmed = hint.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// Returns the `CAPSEARCH_ROOT` override, if set to something non-empty.
pub fn root_override_from_env() -> Option<PathBuf> {
    match env::var(ROOT_ENV) {
        Ok(value) => root_from_hint(&value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(PathBuf::from(os)),
    }
}

/// Locate the install root.
///
/// Honors `CAPSEARCH_ROOT`, then the build-time `CAPSEARCH_ROOT_HINT`, then
/// falls back to [`DEFAULT_INSTALL_ROOT`]. The root is not required to exist;
/// missing service paths are simply skipped by the content index.
pub fn resolve_install_root() -> PathBuf {
    if let Some(root) = root_override_from_env() {
        return root;
    }

    if let Some(hint) = option_env!("CAPSEARCH_ROOT_HINT") {
        if let Some(root) = root_from_hint(hint) {
            return root;
        }
    }

    PathBuf::from(DEFAULT_INSTALL_ROOT)
}
