use std::future::Future;
use std::sync::Arc;

use pokedex_client::{
    CatalogIndex, ClientConfig, CollectionSync, PokedexClient, spawn_warmup,
};

use crate::CliError;

/// Everything a command needs for one invocation: the client, the shared
/// catalog index, and the runtime that drives them.
pub(crate) struct Session {
    runtime: tokio::runtime::Runtime,
    client: Arc<PokedexClient>,
    index: Arc<CatalogIndex>,
    config: ClientConfig,
}

impl Session {
    pub(crate) fn open(config: ClientConfig) -> Result<Self, CliError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
        let client = PokedexClient::new(&config)?;
        log::debug!(
            "Session open against {} ({})",
            client.base_url(),
            if client.has_token() {
                "token set"
            } else {
                "no token"
            }
        );

        Ok(Self {
            runtime,
            client: Arc::new(client),
            index: Arc::new(CatalogIndex::new()),
            config,
        })
    }

    pub(crate) fn client(&self) -> &PokedexClient {
        &self.client
    }

    pub(crate) fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Start filling the catalog index in the background.
    ///
    /// The task is detached; commands never wait on it. When the session is
    /// dropped the runtime shuts down and the task goes with it.
    pub(crate) fn start_warmup(&self) {
        let _guard = self.runtime.enter();
        drop(spawn_warmup(
            Arc::clone(&self.client),
            Arc::clone(&self.index),
            self.config.page_size,
        ));
    }

    pub(crate) fn sync(&self) -> CollectionSync<PokedexClient> {
        CollectionSync::new(Arc::clone(&self.client), Arc::clone(&self.index))
            .with_page_size(self.config.page_size)
    }

    pub(crate) fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}
