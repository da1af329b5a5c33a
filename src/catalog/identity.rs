use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Top-level grouping for registered services.
///
/// The set is closed: the registry is populated from built-in data and never
/// grows new categories at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Professional,
    Security,
    Development,
    Ml,
    Scanning,
}

impl Category {
    /// Every category in registry order.
    pub const ALL: [Category; 5] = [
        Category::Professional,
        Category::Security,
        Category::Development,
        Category::Ml,
        Category::Scanning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Professional => "professional",
            Category::Security => "security",
            Category::Development => "development",
            Category::Ml => "ml",
            Category::Scanning => "scanning",
        }
    }

    /// Exact, case-sensitive match against the category names.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl TryFrom<&str> for Category {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match Category::parse(value) {
            Some(category) => Ok(category),
            None => bail!(
                "Unknown category: {value} (expected one of {})",
                Category::ALL.map(|c| c.as_str()).join(", ")
            ),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Category::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category '{value}'")))
    }
}

/// `category/service` key used by the content index.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceKey(pub String);

impl ServiceKey {
    pub fn new(category: Category, service: &str) -> Self {
        Self(format!("{}/{}", category.as_str(), service))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
