pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod sync;
pub mod warmup;

#[cfg(test)]
#[path = "tests/fake_api.rs"]
pub(crate) mod fake_api;

pub use api::PokedexApi;
pub use client::PokedexClient;
pub use config::{
    ClientConfig, ConfigSource, ConfigSources, DEFAULT_BASE_URL, config_path, config_sources,
    save_to, set_file_token, set_token_in,
};
pub use error::ApiError;
pub use index::CatalogIndex;
pub use sync::CollectionSync;
pub use warmup::{WarmupReport, spawn_warmup, warm_index};
