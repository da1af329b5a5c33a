//! Registry of installed services keyed by category and service name.
//!
//! The registry is built once from the built-in table and is read-only
//! afterwards, except for the content index it owns. Lookups are exact;
//! search is a case-insensitive substring test over service names.

use crate::catalog::identity::{Category, ServiceKey};
use crate::catalog::model::{BUILTIN_SERVICES, Match, ServiceDescriptor};
use crate::catalog::repository::{ContentIndex, IndexReport};
use crate::{DEFAULT_INSTALL_ROOT, resolve_install_root};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug)]
struct CategoryEntry {
    category: Category,
    services: Vec<(String, ServiceDescriptor)>,
}

#[derive(Clone, Debug)]
/// Service table plus the content index built from it.
pub struct CapabilityRegistry {
    install_root: PathBuf,
    categories: Vec<CategoryEntry>,
    index: ContentIndex,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry {
    /// Registry rooted at the conventional install location (`/opt/mcp`).
    pub fn new() -> Self {
        Self::with_root(DEFAULT_INSTALL_ROOT)
    }

    /// Registry whose descriptor paths live under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let install_root = root.into();
        let categories = BUILTIN_SERVICES
            .iter()
            .map(|(category, services)| CategoryEntry {
                category: *category,
                services: services
                    .iter()
                    .map(|(name, relative)| {
                        (
                            name.to_string(),
                            ServiceDescriptor::new(install_root.join(relative)),
                        )
                    })
                    .collect(),
            })
            .collect();
        Self {
            install_root,
            categories,
            index: ContentIndex::default(),
        }
    }

    /// Registry rooted wherever `CAPSEARCH_ROOT` (or the build hint) points.
    pub fn from_env() -> Self {
        Self::with_root(resolve_install_root())
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Categories in registry order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|entry| entry.category)
    }

    /// Services registered under `category`, in registry order.
    pub fn services(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&str, &ServiceDescriptor)> + '_ {
        self.entry(category)
            .into_iter()
            .flat_map(|entry| entry.services.iter())
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Every `(category, service, descriptor)` triple in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str, &ServiceDescriptor)> + '_ {
        self.categories.iter().flat_map(|entry| {
            entry
                .services
                .iter()
                .map(move |(name, descriptor)| (entry.category, name.as_str(), descriptor))
        })
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|entry| entry.services.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Search service names, optionally scoped by category name.
    ///
    /// An unrecognized category name widens the search to every category and
    /// logs a warning. Use [`CapabilityRegistry::search_in`] with a parsed
    /// [`Category`] to avoid that.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<Match> {
        let scope = match category {
            Some(name) => {
                let parsed = Category::parse(name);
                if parsed.is_none() {
                    warn!(category = name, "unknown category; searching all categories");
                }
                parsed
            }
            None => None,
        };
        self.search_in(query, scope)
    }

    /// Case-insensitive substring search over service names.
    ///
    /// Results follow registry order. An empty query matches everything in
    /// scope.
    pub fn search_in(&self, query: &str, scope: Option<Category>) -> Vec<Match> {
        let needle = query.to_lowercase();
        self.categories
            .iter()
            .filter(|entry| scope.is_none_or(|wanted| wanted == entry.category))
            .flat_map(|entry| {
                entry
                    .services
                    .iter()
                    .map(move |(name, descriptor)| (entry.category, name, descriptor))
            })
            .filter(|(_, name, _)| name.to_lowercase().contains(&needle))
            .map(|(category, name, descriptor)| Match {
                category,
                service: name.clone(),
                details: descriptor.clone(),
            })
            .collect()
    }

    /// Exact lookup by category and service name.
    ///
    /// Returns `None` for unknown names; no case folding.
    pub fn capability_details(&self, category: &str, service: &str) -> Option<&ServiceDescriptor> {
        let category = Category::parse(category)?;
        self.descriptor(category, service)
    }

    /// Typed variant of [`CapabilityRegistry::capability_details`].
    pub fn descriptor(&self, category: Category, service: &str) -> Option<&ServiceDescriptor> {
        self.entry(category)?
            .services
            .iter()
            .find(|(name, _)| name == service)
            .map(|(_, descriptor)| descriptor)
    }

    /// Read every existing descriptor path into the content index.
    pub fn update_index(&mut self) -> IndexReport {
        let Self {
            categories, index, ..
        } = self;
        let services = categories.iter().flat_map(|entry| {
            entry
                .services
                .iter()
                .map(move |(name, descriptor)| (entry.category, name.as_str(), descriptor))
        });
        index.refresh(services)
    }

    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Indexed content for a `(category, service)` pair, if any was read.
    pub fn indexed_content(&self, category: Category, service: &str) -> Option<&str> {
        self.index.get(&ServiceKey::new(category, service))
    }

    fn entry(&self, category: Category) -> Option<&CategoryEntry> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
    }
}
