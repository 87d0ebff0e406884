//! Run-wide cache of resolved hrefs, keyed by the name they were requested under.

use std::collections::{BTreeMap, HashMap};

use crate::error::Error;
use crate::resolver::HrefResolver;
use crate::types::Href;

/// Every href resolved during one generation run. Entries are never evicted.
#[derive(Debug, Default)]
pub struct LinkCache {
    /// Name → href.
    links: HashMap<String, Href>,
}

impl LinkCache {
    /// Resolve `name` and cache the result on success. Failures leave the cache untouched.
    pub fn build_and_cache(&mut self, resolver: &HrefResolver<'_>, name: &str) -> Option<Href> {
        let href = resolver.resolve(name)?;
        self.put(name, href.clone());
        return Some(href);
    }

    /// All cached links sorted by name.
    pub fn entries(&self) -> BTreeMap<&str, &Href> {
        return self.links.iter().map(|(name, href)| return (name.as_str(), href)).collect();
    }

    /// Previously cached href for `name`. Never triggers resolution; an empty name has no link.
    pub fn get(&self, name: &str) -> Option<&Href> {
        if name.is_empty() {
            return None;
        }
        return self.links.get(name);
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        return self.links.is_empty();
    }

    /// Number of cached links.
    pub fn len(&self) -> usize {
        return self.links.len();
    }

    /// Store or overwrite the href for `name`.
    pub fn put(&mut self, name: &str, href: Href) {
        self.links.insert(name.to_string(), href);
    }

    /// Serialize the cache as a JSON object sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        return Ok(serde_json::to_string_pretty(&self.entries())?);
    }
}
