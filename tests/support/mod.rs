#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use capsearch::{CapabilityRegistry, Category};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Temporary install root with a registry pointed at it. Service files are
// created on demand so each test controls which paths exist.
pub struct TempInstall {
    pub dir: TempDir,
}

impl TempInstall {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to create temp install root")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry(&self) -> CapabilityRegistry {
        CapabilityRegistry::with_root(self.root())
    }

    /// Path the registry uses for `category/service` under this root.
    pub fn service_path(&self, category: Category, service: &str) -> Result<PathBuf> {
        let registry = self.registry();
        match registry.descriptor(category, service) {
            Some(descriptor) => Ok(descriptor.path().to_path_buf()),
            None => bail!("{category}/{service} is not registered"),
        }
    }

    /// Write `contents` at the service's path, creating parent directories.
    pub fn install(&self, category: Category, service: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.service_path(category, service)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

pub fn capsearch_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_capsearch"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
