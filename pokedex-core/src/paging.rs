//! Pagination arithmetic for the catalog list endpoint.
//!
//! Catalog identifiers are sequential and 1-based, so the page containing a
//! given identifier can be computed directly instead of scanned for.

/// Highest identifier served by the catalog.
pub const CATALOG_MAX_ID: u32 = 874;

/// Page size used for browsing, background warming, and fallback lookups.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A concrete `limit`/`offset` pair that is safe to send to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    /// One past the last identifier this page can contain.
    pub fn end(&self) -> u32 {
        self.offset + self.limit
    }
}

/// Clamp a page request so it never reaches past `max_id`.
///
/// Returns `None` when there is nothing to fetch (`offset >= max_id` or a
/// zero limit); callers must treat that as an empty page and skip the request.
pub fn clamp_page(limit: u32, offset: u32, max_id: u32) -> Option<PageRequest> {
    if offset >= max_id || limit == 0 {
        return None;
    }
    Some(PageRequest {
        limit: limit.min(max_id - offset),
        offset,
    })
}

/// Offset of the page that contains `id`: `floor((id - 1) / page_size) * page_size`.
///
/// `None` for identifier 0, a zero page size, or a page that would start at
/// or beyond `max_id`.
pub fn page_offset_for(id: u32, page_size: u32, max_id: u32) -> Option<u32> {
    if id == 0 || page_size == 0 {
        return None;
    }
    let offset = (id - 1) / page_size * page_size;
    (offset < max_id).then_some(offset)
}

/// Number of pages needed to cover `max_id` items.
pub fn total_pages(max_id: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    max_id.div_ceil(page_size)
}

/// Resolve a 0-based page number to a clamped request.
///
/// Page numbers past the end are pulled back to the last page.
pub fn page_for_number(page: u32, page_size: u32, max_id: u32) -> Option<PageRequest> {
    let last = total_pages(max_id, page_size).checked_sub(1)?;
    let page = page.min(last);
    clamp_page(page_size, page * page_size, max_id)
}

#[cfg(test)]
#[path = "tests/paging_tests.rs"]
mod tests;
