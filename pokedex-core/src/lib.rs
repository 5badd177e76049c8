//! Core data types for the pokedex catalog and collection ("box") API.
//!
//! Everything here is plain data plus pure arithmetic: no I/O happens in
//! this crate. The HTTP client lives in `pokedex-client`.

pub mod collection;
pub mod error;
pub mod item;
pub mod paging;

pub use collection::{
    CollectionEntry, CollectionEntryUpdate, MAX_LEVEL, MIN_LEVEL, NewCollectionEntry,
    ResolvedEntry, parse_timestamp,
};
pub use error::CoreError;
pub use item::{CatalogItem, Move, STAT_MAX, SpriteVariant, Sprites, Stats, TypeTag};
pub use paging::{
    CATALOG_MAX_ID, DEFAULT_PAGE_SIZE, PageRequest, clamp_page, page_for_number,
    page_offset_for, total_pages,
};
