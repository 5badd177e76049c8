use std::path::{Path, PathBuf};

use pokedex_core::DEFAULT_PAGE_SIZE;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://hw4.cis1962.esinx.net/api";

const ENV_API_URL: &str = "POKEDEX_API_URL";
const ENV_TOKEN: &str = "POKEDEX_TOKEN";
const ENV_PAGE_SIZE: &str = "POKEDEX_PAGE_SIZE";

/// Settings for a [`PokedexClient`](crate::PokedexClient) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bearer token for box requests. Browsing the catalog works without one.
    pub token: Option<String>,
    pub page_size: u32,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub token: ConfigSource,
    pub page_size: ConfigSource,
    pub timeout_secs: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    pokedex: Option<PokedexSection>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
struct PokedexSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load config from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Result<Self, ApiError> {
        let file = config_path().and_then(|p| load_config_file(&p));
        resolve(file, |var| std::env::var(var).ok())
    }

    /// Apply explicit values (e.g., from CLI args).
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(token) = token {
            self.token = Some(token);
        }
        self
    }

    /// Token with surrounding whitespace removed; blank tokens count as absent.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

fn resolve(
    file: Option<PokedexSection>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, ApiError> {
    let file = file.unwrap_or_default();
    let defaults = ClientConfig::default();

    let base_url = env(ENV_API_URL)
        .or(file.api_url)
        .unwrap_or(defaults.base_url);

    let token = env(ENV_TOKEN).or(file.token);

    let page_size = match env(ENV_PAGE_SIZE) {
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
            ApiError::config(format!("{} must be a positive integer, got '{}'", ENV_PAGE_SIZE, raw))
        })?,
        None => file.page_size.unwrap_or(defaults.page_size),
    };
    if page_size == 0 {
        return Err(ApiError::config("page_size must be greater than zero"));
    }

    Ok(ClientConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        token,
        page_size,
        timeout_secs: file.timeout_secs,
    })
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex").join("config.toml"))
}

/// Save config to `path`, creating parent directories as needed.
///
/// Values equal to the built-in defaults are left out of the file.
pub fn save_to(config: &ClientConfig, path: &Path) -> Result<(), ApiError> {
    let defaults = ClientConfig::default();
    let section = PokedexSection {
        api_url: (config.base_url != defaults.base_url).then(|| config.base_url.clone()),
        token: config.bearer_token().map(str::to_string),
        page_size: (config.page_size != defaults.page_size).then_some(config.page_size),
        timeout_secs: config.timeout_secs,
    };
    write_section(path, section)
}

/// Store `token` in the default config file, leaving every other saved
/// setting as it is. `None` or a blank token removes it. Returns the path
/// written.
pub fn set_file_token(token: Option<&str>) -> Result<PathBuf, ApiError> {
    let path = config_path()
        .ok_or_else(|| ApiError::config("Could not determine config directory"))?;
    set_token_in(&path, token)?;
    Ok(path)
}

/// Update only the token in the config file at `path`.
///
/// Environment variables are never consulted, so nothing set only in the
/// environment ends up on disk. A file that exists but cannot be parsed is
/// an error rather than being overwritten.
pub fn set_token_in(path: &Path, token: Option<&str>) -> Result<(), ApiError> {
    let mut section = read_section(path)?.unwrap_or_default();
    section.token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    write_section(path, section)
}

fn read_section(path: &Path) -> Result<Option<PokedexSection>, ApiError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        ApiError::config(format!("Cannot parse {}: {}", path.display(), e))
    })?;
    Ok(file.pokedex)
}

fn write_section(path: &Path, section: PokedexSection) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = ConfigFile {
        pokedex: Some(section),
    };
    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| ApiError::config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where each config field is coming from.
pub fn config_sources() -> ConfigSources {
    let file = config_path().and_then(|p| load_config_file(&p));
    sources_from(file.as_ref(), |var| std::env::var(var).is_ok())
}

fn sources_from(file: Option<&PokedexSection>, env_set: impl Fn(&str) -> bool) -> ConfigSources {
    let pick = |var: &'static str, in_file: bool, fallback: ConfigSource| {
        if env_set(var) {
            ConfigSource::EnvVar(var)
        } else if in_file {
            ConfigSource::ConfigFile
        } else {
            fallback
        }
    };

    ConfigSources {
        base_url: pick(
            ENV_API_URL,
            file.is_some_and(|f| f.api_url.is_some()),
            ConfigSource::Default,
        ),
        token: pick(
            ENV_TOKEN,
            file.is_some_and(|f| f.token.is_some()),
            ConfigSource::Missing,
        ),
        page_size: pick(
            ENV_PAGE_SIZE,
            file.is_some_and(|f| f.page_size.is_some()),
            ConfigSource::Default,
        ),
        timeout_secs: if file.is_some_and(|f| f.timeout_secs.is_some()) {
            ConfigSource::ConfigFile
        } else {
            ConfigSource::Missing
        },
    }
}

fn load_config_file(path: &Path) -> Option<PokedexSection> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.pokedex,
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
