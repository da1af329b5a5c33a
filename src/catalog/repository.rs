//! In-memory text index over the files behind registered services.
//!
//! The index is filled only by an explicit refresh. Each refresh reads every
//! descriptor path that exists and overwrites the stored content for that
//! key. Keys whose path has since disappeared keep their last content; the
//! index never prunes.

use crate::catalog::identity::{Category, ServiceKey};
use crate::catalog::model::ServiceDescriptor;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default)]
/// Raw file contents keyed by `category/service`.
pub struct ContentIndex {
    entries: BTreeMap<ServiceKey, String>,
}

/// A descriptor path that could not be checked or read as UTF-8 text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReadFailure {
    pub key: ServiceKey,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a single refresh, one bucket per entry disposition.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct IndexReport {
    pub indexed: Vec<ServiceKey>,
    pub missing: Vec<ServiceKey>,
    pub failures: Vec<ReadFailure>,
}

impl IndexReport {
    /// True when every path was either absent or read cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl ContentIndex {
    pub fn get(&self, key: &ServiceKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ServiceKey, &str)> {
        self.entries.iter().map(|(key, content)| (key, content.as_str()))
    }

    /// Re-read every descriptor path in order.
    ///
    /// Absent paths are skipped. Any error while checking or reading a path is
    /// recorded in the report and the remaining entries still run.
    pub(crate) fn refresh<'a, I>(&mut self, services: I) -> IndexReport
    where
        I: IntoIterator<Item = (Category, &'a str, &'a ServiceDescriptor)>,
    {
        let mut report = IndexReport::default();
        for (category, service, descriptor) in services {
            let key = ServiceKey::new(category, service);
            let path = descriptor.path();
            match read_entry(path) {
                Ok(Some(content)) => {
                    debug!(key = %key, bytes = content.len(), "indexed");
                    self.entries.insert(key.clone(), content);
                    report.indexed.push(key);
                }
                Ok(None) => {
                    debug!(key = %key, path = %path.display(), "path missing; skipped");
                    report.missing.push(key);
                }
                Err(err) => {
                    warn!(key = %key, "index read failed: {err:#}");
                    report.failures.push(ReadFailure {
                        key,
                        path: path.to_path_buf(),
                        reason: format!("{err:#}"),
                    });
                }
            }
        }

        info!(
            indexed = report.indexed.len(),
            missing = report.missing.len(),
            failed = report.failures.len(),
            total = self.entries.len(),
            "content index updated"
        );
        report
    }
}

/// `Ok(None)` only when the path is definitely absent.
fn read_entry(path: &Path) -> Result<Option<String>> {
    let present = path
        .try_exists()
        .with_context(|| format!("checking {}", path.display()))?;
    if !present {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Some(content))
}
