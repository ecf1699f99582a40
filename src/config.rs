use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub pokemon: PokemonConfig,
    pub fetch: FetchConfig,
    pub list: ListConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PokemonConfig {
    pub api_url: String,
    /// Language tag used for localized names, labels and descriptions.
    pub language: String,
    /// Source language consulted when no `language` entry exists.
    pub fallback_language: String,
    pub missing_description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Upper bound on requests in flight within one batch.
    pub max_concurrency: usize,
    pub search_pool_size: u32,
    pub search_limit: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: u32,
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        toml::from_str(config_str).map_err(|e| {
            tracing::error!("Failed to parse config: {}", e);
            PokedexError::from(e)
        })
    }

    // Configuration compiled into the binary from config/config.toml
    pub fn load_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokemon: PokemonConfig {
                api_url: "https://pokeapi.co/api/v2".to_string(),
                language: "es".to_string(),
                fallback_language: "en".to_string(),
                missing_description: "No hay descripción disponible.".to_string(),
            },
            fetch: FetchConfig {
                max_concurrency: 16,
                search_pool_size: 1000,
                search_limit: 20,
            },
            list: ListConfig { page_size: 20 },
        }
    }
}
