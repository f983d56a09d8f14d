//! Filter keys and catalog selection.

use crate::{Catalog, Category, Project};
use std::fmt;

/// A filter button's `data-filter` value.
///
/// `Ml` has no matching projects and behaves exactly like `All`. Unknown keys
/// fall back to `All` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Ml,
    Category(Category),
    Unknown(String),
}

impl FilterKey {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => FilterKey::All,
            "ml" => FilterKey::Ml,
            "python" => FilterKey::Category(Category::Python),
            "web" => FilterKey::Category(Category::Web),
            other => FilterKey::Unknown(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => "all",
            FilterKey::Ml => "ml",
            FilterKey::Category(c) => c.as_str(),
            FilterKey::Unknown(raw) => raw,
        }
    }

    /// The fixed set of keys offered by the filter bar.
    pub fn known() -> [FilterKey; 4] {
        [
            FilterKey::All,
            FilterKey::Category(Category::Python),
            FilterKey::Category(Category::Web),
            FilterKey::Ml,
        ]
    }

    pub fn matches(&self, project: &Project) -> bool {
        if !project.featured {
            return false;
        }
        match self {
            FilterKey::Category(c) => project.category == *c,
            FilterKey::All | FilterKey::Ml | FilterKey::Unknown(_) => true,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Featured projects selected by `key`, in catalog order.
pub fn filter_projects<'a>(catalog: &'a Catalog, key: &FilterKey) -> Vec<&'a Project> {
    let selected: Vec<&Project> = catalog
        .projects()
        .iter()
        .filter(|p| key.matches(p))
        .collect();
    tracing::debug!(filter = %key, count = selected.len(), "filtered catalog");
    selected
}
