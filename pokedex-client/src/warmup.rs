//! Background warming of the [`CatalogIndex`].
//!
//! Pages through the whole catalog once, merging `id -> name` pairs into the
//! shared index. Warming is an optimization only: the first failure stops the
//! loop and is logged, never surfaced. Whatever was merged before the failure
//! stays in the index.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::PokedexApi;
use crate::error::ApiError;
use crate::index::CatalogIndex;

/// Outcome of one warming pass.
#[derive(Debug, Default)]
pub struct WarmupReport {
    pub pages_fetched: u32,
    pub entries_added: usize,
    /// The failure that stopped the pass early, if any
    pub error: Option<ApiError>,
}

impl WarmupReport {
    pub fn completed(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetch pages at offsets `0, P, 2P, ...` while `offset < max_id`.
///
/// The last page's limit is clamped by [`PokedexApi::list_page`], so no
/// request ever asks for ids past the end of the catalog.
pub async fn warm_index<A: PokedexApi>(
    api: &A,
    index: &CatalogIndex,
    page_size: u32,
) -> WarmupReport {
    let mut report = WarmupReport::default();
    if page_size == 0 {
        return report;
    }

    let max_id = api.max_id();
    let total = max_id.div_ceil(page_size);
    log::debug!(
        "Warming catalog index: {} pages of {} (max id {})",
        total,
        page_size,
        max_id
    );

    let mut offset = 0;
    while offset < max_id {
        let page = match api.list_page(page_size, offset).await {
            Ok(page) => page,
            Err(e) => {
                report.error = Some(e);
                break;
            }
        };
        report.pages_fetched += 1;
        report.entries_added += index
            .extend(page.into_iter().map(|item| (item.id, item.name)))
            .await;
        let cached = index.len().await;
        log::debug!(
            "Warm page {}/{} done (offset {}), index has {} entries",
            report.pages_fetched,
            total,
            offset,
            cached
        );
        offset += page_size;
    }

    report
}

/// Spawn [`warm_index`] as a detached task.
///
/// Nobody needs to await the handle: completion is only observable through
/// the index. A failure is logged and then dropped.
pub fn spawn_warmup<A>(api: Arc<A>, index: Arc<CatalogIndex>, page_size: u32) -> JoinHandle<()>
where
    A: PokedexApi + 'static,
{
    tokio::spawn(async move {
        let report = warm_index(api.as_ref(), &index, page_size).await;
        let cached = index.len().await;
        match report.error {
            None => log::debug!(
                "Catalog index warm: {} pages, {} new entries",
                report.pages_fetched,
                report.entries_added
            ),
            Some(e) => log::warn!(
                "Catalog index warming stopped after {} pages ({} entries kept): {}",
                report.pages_fetched,
                cached,
                e
            ),
        }
    })
}

#[cfg(test)]
#[path = "tests/warmup_tests.rs"]
mod tests;
