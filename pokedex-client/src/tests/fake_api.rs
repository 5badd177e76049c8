//! In-memory [`PokedexApi`] that records every call it receives.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use pokedex_core::{
    CatalogItem, CollectionEntry, CollectionEntryUpdate, NewCollectionEntry, PageRequest,
};

use crate::api::PokedexApi;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Page(PageRequest),
    ItemByName(String),
    ListCollection,
    GetEntry(String),
    Create(u32),
    Update(String),
    Delete(String),
    Clear,
}

pub(crate) struct FakeApi {
    max_id: u32,
    logged_in: bool,
    entries: Mutex<Vec<CollectionEntry>>,
    failing_pages: HashSet<u32>,
    failing_entries: HashSet<String>,
    missing_items: HashSet<u32>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<u32>,
}

pub(crate) fn item_name(id: u32) -> String {
    format!("mon-{}", id)
}

pub(crate) fn item(id: u32) -> CatalogItem {
    CatalogItem {
        id,
        name: item_name(id),
        sprites: Default::default(),
        types: Vec::new(),
        stats: Default::default(),
        moves: Vec::new(),
        description: String::new(),
    }
}

pub(crate) fn entry(id: &str, pokemon_id: u32) -> CollectionEntry {
    CollectionEntry {
        id: id.to_string(),
        pokemon_id,
        level: 5,
        location: "Route 1".to_string(),
        notes: None,
        created_at: timestamp(),
    }
}

impl FakeApi {
    pub(crate) fn new(max_id: u32) -> Self {
        Self {
            max_id,
            logged_in: true,
            entries: Mutex::new(Vec::new()),
            failing_pages: HashSet::new(),
            failing_entries: HashSet::new(),
            missing_items: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub(crate) fn with_entry(self, id: &str, pokemon_id: u32) -> Self {
        self.entries.lock().unwrap().push(entry(id, pokemon_id));
        self
    }

    /// Page requests at this offset fail with HTTP 500.
    pub(crate) fn failing_page_at(mut self, offset: u32) -> Self {
        self.failing_pages.insert(offset);
        self
    }

    /// `GET /box/{id}` fails with HTTP 500 for this entry.
    pub(crate) fn failing_entry(mut self, id: &str) -> Self {
        self.failing_entries.insert(id.to_string());
        self
    }

    /// Leave this id out of every page, as if the catalog had a gap.
    pub(crate) fn without_item(mut self, id: u32) -> Self {
        self.missing_items.insert(id);
        self
    }

    pub(crate) fn logged_out(mut self) -> Self {
        self.logged_in = false;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn page_calls(&self) -> Vec<PageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Page(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn entry_ids(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn require_login(&self) -> Result<(), ApiError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(ApiError::NotLoggedIn)
        }
    }
}

pub(crate) fn server_error(message: impl Into<String>) -> ApiError {
    ApiError::Status {
        status: 500,
        message: message.into(),
    }
}

impl PokedexApi for FakeApi {
    fn max_id(&self) -> u32 {
        self.max_id
    }

    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<CatalogItem>, ApiError> {
        self.record(Call::Page(page));
        if self.failing_pages.contains(&page.offset) {
            return Err(server_error(format!("page at offset {} failed", page.offset)));
        }
        Ok((page.offset + 1..=page.end())
            .filter(|id| *id <= self.max_id && !self.missing_items.contains(id))
            .map(item)
            .collect())
    }

    async fn item_by_name(&self, name: &str) -> Result<CatalogItem, ApiError> {
        self.record(Call::ItemByName(name.to_string()));
        name.strip_prefix("mon-")
            .and_then(|id| id.parse::<u32>().ok())
            .filter(|id| *id >= 1 && *id <= self.max_id)
            .map(item)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("Pokemon {} not found", name),
            })
    }

    async fn list_collection(&self) -> Result<Vec<String>, ApiError> {
        self.require_login()?;
        self.record(Call::ListCollection);
        Ok(self.entry_ids())
    }

    async fn create_entry(&self, new: &NewCollectionEntry) -> Result<CollectionEntry, ApiError> {
        self.require_login()?;
        self.record(Call::Create(new.pokemon_id));
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = format!("new-{}", *next);
            *next += 1;
            id
        };
        let created = CollectionEntry {
            id,
            pokemon_id: new.pokemon_id,
            level: new.level,
            location: new.location.clone(),
            notes: new.notes.clone(),
            created_at: new.created_at,
        };
        self.entries.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_entry(&self, id: &str) -> Result<CollectionEntry, ApiError> {
        self.require_login()?;
        self.record(Call::GetEntry(id.to_string()));
        if self.failing_entries.contains(id) {
            return Err(server_error(format!("entry {} failed", id)));
        }
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Box entry not found".to_string(),
            })
    }

    async fn update_entry(
        &self,
        id: &str,
        update: &CollectionEntryUpdate,
    ) -> Result<CollectionEntry, ApiError> {
        self.require_login()?;
        self.record(Call::Update(id.to_string()));
        let mut entries = self.entries.lock().unwrap();
        let existing = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Box entry not found".to_string(),
            })?;
        existing.level = update.level;
        existing.location = update.location.clone();
        existing.notes = update.notes.clone();
        existing.created_at = update.created_at;
        Ok(existing.clone())
    }

    async fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        self.require_login()?;
        self.record(Call::Delete(id.to_string()));
        self.entries.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }

    async fn clear_collection(&self) -> Result<(), ApiError> {
        self.require_login()?;
        self.record(Call::Clear);
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

pub(crate) fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}
