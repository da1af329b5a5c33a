//! Value types returned by the registry plus the built-in service table.

use crate::catalog::identity::Category;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where an installed service lives on disk.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ServiceDescriptor {
    pub path: PathBuf,
}

impl ServiceDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One search hit.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Match {
    pub category: Category,
    pub service: String,
    pub details: ServiceDescriptor,
}

/// Services shipped under each category, as paths relative to the install root.
///
/// Order here is the registry's iteration order and therefore the order of
/// search results.
pub(crate) const BUILTIN_SERVICES: &[(Category, &[(&str, &str)])] = &[
    (
        Category::Professional,
        &[
            ("terraform", "professional-services/terraform"),
            ("architecture", "professional-services/architecture"),
            ("migration", "professional-services/migration"),
        ],
    ),
    (
        Category::Security,
        &[
            ("policy", "forseti-security/policy"),
            ("compliance", "forseti-security/compliance"),
            ("monitoring", "forseti-security/monitoring"),
        ],
    ),
    (
        Category::Development,
        &[
            ("python", "getting-started-python/python"),
            ("containers", "getting-started-python/containers"),
            ("apis", "getting-started-python/apis"),
        ],
    ),
    (
        Category::Ml,
        &[
            ("pipelines", "ml-on-gcp/pipelines"),
            ("models", "ml-on-gcp/models"),
            ("training", "ml-on-gcp/training"),
        ],
    ),
    (
        Category::Scanning,
        &[
            ("resources", "gcp_scanner/resources"),
            ("network", "gcp_scanner/network"),
            ("iam", "gcp_scanner/iam"),
        ],
    ),
];
