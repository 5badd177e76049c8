use std::time::{Duration, Instant};

use pokedex_core::{
    CATALOG_MAX_ID, CatalogItem, CollectionEntry, CollectionEntryUpdate, NewCollectionEntry,
    PageRequest,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::PokedexApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP client for the catalog (`/pokemon`) and box (`/box`) endpoints.
///
/// Catalog requests are anonymous. Box requests attach the configured bearer
/// token and fail with [`ApiError::NotLoggedIn`] before sending when there is
/// none.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    max_id: u32,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl PokedexClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        // `RequestBuilder::json` sets its own content type; defaults only fill
        // headers a request has not set.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::config(format!("Invalid API URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::config(format!(
                "API URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            token: config.bearer_token().map(str::to_string),
            max_id: CATALOG_MAX_ID,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, req: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotLoggedIn)?;
        Ok(req.bearer_auth(token))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        label: &str,
    ) -> Result<Option<T>, ApiError> {
        let start = Instant::now();
        let resp = req.send().await.map_err(|e| {
            log::debug!(
                "{}: network error after {:.2}ms: {}",
                label,
                start.elapsed().as_secs_f64() * 1000.0,
                e
            );
            ApiError::transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(ApiError::transport)?;
        log::debug!(
            "{}: HTTP {} ({} bytes) in {:.2}ms",
            label,
            status.as_u16(),
            body.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        decode_response(status.as_u16(), &body)
    }

    async fn execute_value<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        label: &str,
    ) -> Result<T, ApiError> {
        self.execute(req, label).await?.ok_or(ApiError::EmptyResponse)
    }
}

/// Turn a status code and body into a value.
///
/// - non-2xx: the body's `message` field, or `HTTP error {status}`
/// - 204 or an empty body: `Ok(None)`
/// - anything else must parse as JSON
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", status));
        log::debug!("Request failed: HTTP {}: {}", status, message);
        return Err(ApiError::Status { status, message });
    }

    if status == 204 || body.iter().all(u8::is_ascii_whitespace) {
        log::debug!("Received empty response body (HTTP {})", status);
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(ApiError::MalformedResponse)
}

impl PokedexApi for PokedexClient {
    fn max_id(&self) -> u32 {
        self.max_id
    }

    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<CatalogItem>, ApiError> {
        let mut url = self.endpoint(&["pokemon", ""]);
        url.query_pairs_mut()
            .append_pair("limit", &page.limit.to_string())
            .append_pair("offset", &page.offset.to_string());
        log::debug!(
            "Fetching catalog page: limit={}, offset={} ({})",
            page.limit,
            page.offset,
            url
        );

        let items: Vec<CatalogItem> = self
            .execute(self.http.get(url), "list catalog")
            .await?
            .unwrap_or_default();

        match (items.first(), items.last()) {
            (Some(first), Some(last)) => log::debug!(
                "Received {} items: {} (#{}) to {} (#{})",
                items.len(),
                first.name,
                first.id,
                last.name,
                last.id
            ),
            _ => log::debug!("Received an empty catalog page"),
        }
        Ok(items)
    }

    async fn item_by_name(&self, name: &str) -> Result<CatalogItem, ApiError> {
        let url = self.endpoint(&["pokemon", name]);
        log::debug!("Fetching details for {} ({})", name, url);
        self.execute_value(self.http.get(url), "get item").await
    }

    async fn list_collection(&self) -> Result<Vec<String>, ApiError> {
        let req = self.authorized(self.http.get(self.endpoint(&["box", ""])))?;
        let ids: Vec<String> = self
            .execute(req, "list box")
            .await?
            .unwrap_or_default();
        log::debug!("Retrieved {} box entry ids", ids.len());
        Ok(ids)
    }

    async fn create_entry(&self, entry: &NewCollectionEntry) -> Result<CollectionEntry, ApiError> {
        let req = self.authorized(self.http.post(self.endpoint(&["box", ""])))?;
        let created: CollectionEntry = self
            .execute_value(req.json(entry), "create box entry")
            .await?;
        log::debug!("Created box entry {}", created.id);
        Ok(created)
    }

    async fn get_entry(&self, id: &str) -> Result<CollectionEntry, ApiError> {
        let req = self.authorized(self.http.get(self.endpoint(&["box", id])))?;
        let entry: CollectionEntry = self.execute_value(req, "get box entry").await?;
        log::debug!("Box entry {} refers to catalog id {}", id, entry.pokemon_id);
        Ok(entry)
    }

    async fn update_entry(
        &self,
        id: &str,
        update: &CollectionEntryUpdate,
    ) -> Result<CollectionEntry, ApiError> {
        let req = self.authorized(self.http.put(self.endpoint(&["box", id])))?;
        self.execute_value(req.json(update), "update box entry").await
    }

    async fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        let req = self.authorized(self.http.delete(self.endpoint(&["box", id])))?;
        self.execute::<serde_json::Value>(req, "delete box entry")
            .await?;
        Ok(())
    }

    async fn clear_collection(&self) -> Result<(), ApiError> {
        let req = self.authorized(self.http.delete(self.endpoint(&["box", ""])))?;
        self.execute::<serde_json::Value>(req, "clear box").await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
