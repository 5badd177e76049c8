use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;

/// Shared, append-only cache of catalog `id -> name`.
///
/// The index may be partially populated at any time. A missing id is not an
/// error, only a hint to resolve it directly. Once an id is present its name
/// never changes and entries are never removed.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    names: RwLock<HashMap<u32, String>>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: u32) -> Option<String> {
        self.names.read().await.get(&id).cloned()
    }

    /// Record a name. Returns `false` (and keeps the old value) if the id was
    /// already present.
    pub async fn insert(&self, id: u32, name: impl Into<String>) -> bool {
        let mut names = self.names.write().await;
        if names.contains_key(&id) {
            return false;
        }
        names.insert(id, name.into());
        true
    }

    /// Merge many pairs under a single lock. Returns how many were new.
    pub async fn extend<I>(&self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        let mut names = self.names.write().await;
        let before = names.len();
        for (id, name) in pairs {
            names.entry(id).or_insert(name);
        }
        names.len() - before
    }

    pub async fn contains(&self, id: u32) -> bool {
        self.names.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.names.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.names.read().await.is_empty()
    }

    /// Ordered copy of the current contents.
    pub async fn snapshot(&self) -> BTreeMap<u32, String> {
        self.names
            .read()
            .await
            .iter()
            .map(|(id, name)| (*id, name.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
