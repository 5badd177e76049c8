//! Collection synchronizer: joins box entries with their catalog items.
//!
//! Names come from the shared [`CatalogIndex`] when possible. On a miss the
//! page containing the id is computed directly from the id arithmetic and
//! fetched once, so a miss costs one page request instead of a catalog scan.

use std::sync::Arc;

use futures::future::try_join_all;
use pokedex_core::{
    CollectionEntry, CollectionEntryUpdate, DEFAULT_PAGE_SIZE, NewCollectionEntry, ResolvedEntry,
    page_offset_for,
};

use crate::api::PokedexApi;
use crate::error::ApiError;
use crate::index::CatalogIndex;

/// Resolves and mutates the authenticated user's box.
#[derive(Debug)]
pub struct CollectionSync<A> {
    api: Arc<A>,
    index: Arc<CatalogIndex>,
    page_size: u32,
}

impl<A> Clone for CollectionSync<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            index: Arc::clone(&self.index),
            page_size: self.page_size,
        }
    }
}

impl<A: PokedexApi> CollectionSync<A> {
    pub fn new(api: Arc<A>, index: Arc<CatalogIndex>) -> Self {
        Self {
            api,
            index,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size for fallback page fetches. Zero is ignored.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Ids of every entry in the box.
    pub async fn list_ids(&self) -> Result<Vec<String>, ApiError> {
        self.api.list_collection().await
    }

    /// Name for a catalog id: index first, then the one page that holds it.
    ///
    /// A successful page lookup is written back into the index.
    pub async fn resolve_name(&self, pokemon_id: u32) -> Result<String, ApiError> {
        if let Some(name) = self.index.get(pokemon_id).await {
            return Ok(name);
        }

        let offset = page_offset_for(pokemon_id, self.page_size, self.api.max_id())
            .ok_or(ApiError::NotFound { pokemon_id })?;
        log::debug!(
            "Catalog id {} not cached, fetching page at offset {}",
            pokemon_id,
            offset
        );

        let page = self.api.list_page(self.page_size, offset).await?;
        let item = page
            .into_iter()
            .find(|item| item.id == pokemon_id)
            .ok_or(ApiError::NotFound { pokemon_id })?;

        self.index.insert(item.id, item.name.clone()).await;
        Ok(item.name)
    }

    /// Fetch one entry and the full catalog item it refers to.
    pub async fn resolve_entry(&self, id: &str) -> Result<ResolvedEntry, ApiError> {
        let entry = self.api.get_entry(id).await?;
        let name = self.resolve_name(entry.pokemon_id).await?;
        let item = self.api.item_by_name(&name).await?;
        Ok(ResolvedEntry { entry, item })
    }

    /// Resolve every entry in the box concurrently.
    ///
    /// Fails with the first error any single resolution hits; no partial list
    /// is returned. Output follows the order the service listed the ids in.
    pub async fn resolve_collection(&self) -> Result<Vec<ResolvedEntry>, ApiError> {
        let ids = self.list_ids().await?;
        log::debug!("Resolving {} box entries", ids.len());
        try_join_all(ids.iter().map(|id| self.resolve_entry(id))).await
    }

    pub async fn create(&self, entry: &NewCollectionEntry) -> Result<CollectionEntry, ApiError> {
        entry.validate()?;
        self.api.create_entry(entry).await
    }

    /// Update level, location, notes, or catch time. The catalog reference
    /// cannot change.
    pub async fn update(
        &self,
        id: &str,
        update: &CollectionEntryUpdate,
    ) -> Result<CollectionEntry, ApiError> {
        update.validate()?;
        self.api.update_entry(id, update).await
    }

    /// Remove one entry. Later listings simply omit the id.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_entry(id).await
    }

    /// Remove every entry in the box.
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.api.clear_collection().await
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
