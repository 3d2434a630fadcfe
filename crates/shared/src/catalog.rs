use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Profile, Script},
    error::CatalogError,
};

/// The profiles and scripts a sidebar lists, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl Catalog {
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(raw).map_err(CatalogError::parse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Ids must be non-empty and unique within their own list. A profile and
    /// a script may share an id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_ids("profile", self.profiles.iter().map(|p| p.id.as_str()))?;
        check_ids("script", self.scripts.iter().map(|s| s.id.as_str()))?;
        Ok(())
    }

    pub fn demo() -> Self {
        Self {
            profiles: vec![
                Profile::new("personal", "Personal"),
                Profile::new("work", "Work"),
            ],
            scripts: vec![
                Script::new("hello-worker", "hello-worker"),
                Script::new("image-resizer", "image-resizer"),
                Script::new("kv-export", "kv-export"),
            ],
        }
    }
}

fn check_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CatalogError::empty_id(kind, index));
        }
        if !seen.insert(id) {
            return Err(CatalogError::duplicate_id(kind, id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
