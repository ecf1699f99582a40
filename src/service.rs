use crate::batch::{join_with_fallback, try_join_bounded};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::list::PokemonSource;
use crate::model::{Detail, Summary};
use crate::pokemon::{
    NamedApiResource, NamesResponse, PokemonApiResponse, PokemonListResponse, SpeciesResponse,
};
use crate::transform::{self, Localization, localized_name};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;

/// Client for the PokeAPI endpoints the Pokédex screens need.
///
/// List and search batches fail as a whole when any item fails. Detail
/// localization degrades per type or ability to the source-language id.
#[derive(Clone)]
pub struct PokeApiService {
    client: reqwest::Client,
    config: Arc<Config>,
}

async fn fetch_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    tracing::debug!("Fetching {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        tracing::debug!("HTTP request to {} failed: {}", url, e);
        PokedexError::NetworkError(format!("request to {} failed: {}", url, e))
    })?;

    if !response.status().is_success() {
        return Err(PokedexError::NetworkError(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }

    let body = response.text().await.map_err(|e| {
        PokedexError::NetworkError(format!("reading body from {} failed: {}", url, e))
    })?;

    serde_json::from_str(&body)
        .map_err(|e| PokedexError::DecodeError(format!("JSON parsing failed for {}: {}", url, e)))
}

async fn fetch_summary(client: reqwest::Client, url: String) -> Result<Summary> {
    let data: PokemonApiResponse = fetch_json(&client, &url).await?;
    transform::to_summary(&data)
}

impl PokeApiService {
    pub fn new(config: Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_url(&self) -> &str {
        self.config.pokemon.api_url.trim_end_matches('/')
    }

    pub async fn get_pokemon_list(&self, limit: u32, offset: u32) -> Result<Vec<Summary>> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.api_url(), limit, offset);
        async {
            let page: PokemonListResponse = fetch_json(&self.client, &url).await?;
            self.fetch_summaries(page.results).await
        }
        .await
        .inspect(|list| tracing::debug!("Fetched {} Pokémon from {}", list.len(), url))
        .inspect_err(|e| tracing::error!("Error fetching Pokémon list: {}", e))
    }

    pub async fn get_pokemon(&self, id_or_name: &str) -> Result<Summary> {
        let url = format!("{}/pokemon/{}", self.api_url(), id_or_name);
        fetch_summary(self.client.clone(), url)
            .await
            .inspect_err(|e| tracing::error!("Error fetching Pokémon {}: {}", id_or_name, e))
    }

    pub async fn get_pokemon_by_url(&self, url: &str) -> Result<Summary> {
        fetch_summary(self.client.clone(), url.to_string())
            .await
            .inspect_err(|e| tracing::error!("Error fetching Pokémon by URL {}: {}", url, e))
    }

    pub async fn get_pokemon_detail(&self, id_or_name: &str) -> Result<Detail> {
        self.fetch_detail(id_or_name)
            .await
            .inspect(|detail| {
                tracing::debug!("Fetched detail for {} (ID: {})", detail.name, detail.id)
            })
            .inspect_err(|e| tracing::error!("Error fetching Pokémon detail {}: {}", id_or_name, e))
    }

    /// The API has no text search, so this filters the full name list locally
    /// and only resolves the first `search_limit` matches.
    pub async fn search_pokemon(&self, query: &str) -> Result<Vec<Summary>> {
        let url = format!(
            "{}/pokemon?limit={}",
            self.api_url(),
            self.config.fetch.search_pool_size
        );
        let needle = query.to_lowercase();

        async {
            let page: PokemonListResponse = fetch_json(&self.client, &url).await?;
            let matches: Vec<NamedApiResource> = page
                .results
                .into_iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .take(self.config.fetch.search_limit)
                .collect();
            tracing::debug!("Search '{}' matched {} Pokémon", query, matches.len());
            self.fetch_summaries(matches).await
        }
        .await
        .inspect_err(|e| tracing::error!("Error searching Pokémon '{}': {}", query, e))
    }

    async fn fetch_summaries(&self, items: Vec<NamedApiResource>) -> Result<Vec<Summary>> {
        let futures = items
            .into_iter()
            .map(|item| fetch_summary(self.client.clone(), item.url))
            .collect();
        try_join_bounded(futures, self.config.fetch.max_concurrency).await
    }

    async fn fetch_detail(&self, id_or_name: &str) -> Result<Detail> {
        let url = format!("{}/pokemon/{}", self.api_url(), id_or_name);
        let data: PokemonApiResponse = fetch_json(&self.client, &url).await?;
        let species: SpeciesResponse = fetch_json(&self.client, &data.species.url).await?;

        let language = &self.config.pokemon.language;
        let name = localized_name(&species.names, language).unwrap_or_else(|| data.name.clone());

        let type_jobs = data
            .types
            .iter()
            .map(|t| self.label_job(&t.r#type))
            .collect();
        let ability_jobs = data
            .abilities
            .iter()
            .map(|a| self.label_job(&a.ability))
            .collect();

        let limit = self.config.fetch.max_concurrency;
        let (types, abilities) = tokio::join!(
            join_with_fallback(type_jobs, limit),
            join_with_fallback(ability_jobs, limit)
        );

        let localization = Localization {
            name: Some(name),
            types: Some(types),
            abilities: Some(abilities),
        };
        transform::to_detail(&data, &species, &localization, &self.config.pokemon)
    }

    // Resolves a type or ability label. A missing entry for the target
    // language is not an error; the source id is returned as-is.
    fn label_job(
        &self,
        resource: &NamedApiResource,
    ) -> (
        impl Future<Output = Result<String>> + Send + 'static + use<>,
        String,
    ) {
        let client = self.client.clone();
        let url = resource.url.clone();
        let language = self.config.pokemon.language.clone();
        let source_name = resource.name.clone();
        let fallback = source_name.clone();

        let job = async move {
            let names: NamesResponse = fetch_json(&client, &url).await?;
            Ok::<_, PokedexError>(localized_name(&names.names, &language).unwrap_or(source_name))
        };
        (job, fallback)
    }
}

impl PokemonSource for PokeApiService {
    fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Summary>>> + Send {
        PokeApiService::get_pokemon_list(self, limit, offset)
    }
}
