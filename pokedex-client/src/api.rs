use std::future::Future;

use pokedex_core::{
    CatalogItem, CollectionEntry, CollectionEntryUpdate, NewCollectionEntry, PageRequest,
    clamp_page,
};

use crate::error::ApiError;

/// The remote catalog and box endpoints.
///
/// [`PokedexClient`](crate::PokedexClient) is the HTTP implementation; the
/// cache builder and the synchronizer only depend on this trait.
pub trait PokedexApi: Send + Sync {
    /// Highest catalog identifier the service knows about.
    fn max_id(&self) -> u32;

    /// `GET /pokemon/?limit=L&offset=O` for an already-clamped page.
    fn fetch_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<CatalogItem>, ApiError>> + Send;

    /// `GET /pokemon/{name}`
    fn item_by_name(&self, name: &str)
    -> impl Future<Output = Result<CatalogItem, ApiError>> + Send;

    /// `GET /box/`
    fn list_collection(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// `POST /box/`
    fn create_entry(
        &self,
        entry: &NewCollectionEntry,
    ) -> impl Future<Output = Result<CollectionEntry, ApiError>> + Send;

    /// `GET /box/{id}`
    fn get_entry(&self, id: &str) -> impl Future<Output = Result<CollectionEntry, ApiError>> + Send;

    /// `PUT /box/{id}`
    fn update_entry(
        &self,
        id: &str,
        update: &CollectionEntryUpdate,
    ) -> impl Future<Output = Result<CollectionEntry, ApiError>> + Send;

    /// `DELETE /box/{id}`
    fn delete_entry(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /box/`
    fn clear_collection(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// List a catalog page, clamping `limit` so the request never reaches
    /// past [`max_id`](Self::max_id).
    ///
    /// Offsets at or beyond the end return an empty page without a request.
    fn list_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<CatalogItem>, ApiError>> + Send {
        async move {
            match clamp_page(limit, offset, self.max_id()) {
                Some(page) => self.fetch_page(page).await,
                None => {
                    log::debug!(
                        "Offset {} is past the last catalog id {}, returning empty page",
                        offset,
                        self.max_id()
                    );
                    Ok(Vec::new())
                }
            }
        }
    }
}
