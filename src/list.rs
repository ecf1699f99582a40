//! Paginated, searchable Pokémon list state.
//!
//! [`PokemonList`] owns the loaded collection, the derived search view and
//! the pagination cursor. Every operation takes `&self` so one instance can be
//! shared between the screen and background tasks. The lock is never held
//! across a fetch. A request generation is captured when a fetch starts, and
//! results from a generation older than the current one (for instance a
//! `load_more` that finishes after a `refresh`) are discarded.

use crate::error::Result;
use crate::model::Summary;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

pub const INITIAL_LOAD_ERROR: &str = "Failed to load Pokémon";

/// Page provider behind a [`PokemonList`].
pub trait PokemonSource: Send + Sync {
    fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Summary>>> + Send;
}

impl<S: PokemonSource> PokemonSource for Arc<S> {
    fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Summary>>> + Send {
        S::get_pokemon_list(self, limit, offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    LoadingMore,
    Error(String),
}

#[derive(Debug)]
struct ListState {
    items: Vec<Summary>,
    filtered: Vec<Summary>,
    query: String,
    offset: u32,
    phase: LoadPhase,
    generation: u64,
}

impl ListState {
    fn refilter(&mut self) {
        self.filtered = filter_summaries(&self.items, &self.query);
    }

    fn begin_initial_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }
}

pub struct PokemonList<S> {
    source: S,
    page_size: u32,
    state: Mutex<ListState>,
}

impl<S: PokemonSource> PokemonList<S> {
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            state: Mutex::new(ListState {
                items: Vec::new(),
                filtered: Vec::new(),
                query: String::new(),
                offset: 0,
                phase: LoadPhase::Idle,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        // state stays consistent even if a holder panicked, so recover it
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// First page load, run on mount and by [`refresh`](Self::refresh).
    pub async fn load_initial(&self) {
        let generation = {
            let mut state = self.lock();
            state.begin_initial_load()
        };
        self.finish_initial_load(generation).await;
    }

    async fn finish_initial_load(&self, generation: u64) {
        let result = self.source.get_pokemon_list(self.page_size, 0).await;

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("Discarding stale initial load (generation {})", generation);
            return;
        }
        match result {
            Ok(page) => {
                tracing::debug!("Loaded {} Pokémon", page.len());
                state.items.clear();
                merge_unique(&mut state.items, page);
                state.offset = self.page_size;
                state.phase = LoadPhase::Ready;
                state.refilter();
            }
            Err(e) => {
                tracing::error!("Error loading Pokémon: {}", e);
                state.phase = LoadPhase::Error(INITIAL_LOAD_ERROR.to_string());
            }
        }
    }

    /// Fetches the next page. Returns `false` without fetching unless the list
    /// is ready and no search query is active.
    pub async fn load_more(&self) -> bool {
        let (generation, offset) = {
            let mut state = self.lock();
            if state.phase != LoadPhase::Ready || !state.query.trim().is_empty() {
                return false;
            }
            state.phase = LoadPhase::LoadingMore;
            (state.generation, state.offset)
        };

        let result = self.source.get_pokemon_list(self.page_size, offset).await;

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!(
                "Discarding stale page at offset {} (generation {})",
                offset,
                generation
            );
            return true;
        }
        match result {
            Ok(page) => {
                tracing::debug!("Loaded {} more Pokémon at offset {}", page.len(), offset);
                merge_unique(&mut state.items, page);
                state.offset = offset + self.page_size;
                state.refilter();
            }
            Err(e) => tracing::error!("Error loading more Pokémon: {}", e),
        }
        state.phase = LoadPhase::Ready;
        true
    }

    pub async fn refresh(&self) {
        // clearing and the generation bump share one lock so no older page
        // can land in the emptied collection
        let generation = {
            let mut state = self.lock();
            state.offset = 0;
            state.items.clear();
            state.refilter();
            state.begin_initial_load()
        };
        self.finish_initial_load(generation).await;
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.lock();
        state.query = query.into();
        state.refilter();
    }

    pub fn items(&self) -> Vec<Summary> {
        self.lock().items.clone()
    }

    pub fn filtered(&self) -> Vec<Summary> {
        self.lock().filtered.clone()
    }

    pub fn search_query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn offset(&self) -> u32 {
        self.lock().offset
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().phase == LoadPhase::Loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.lock().phase == LoadPhase::LoadingMore
    }

    pub fn error(&self) -> Option<String> {
        match &self.lock().phase {
            LoadPhase::Error(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// Merges `incoming` into `items` by id. An id seen before keeps its position
/// and takes the newer values; new ids are appended in arrival order.
pub fn merge_unique(items: &mut Vec<Summary>, incoming: Vec<Summary>) {
    let mut positions: HashMap<u32, usize> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id, index))
        .collect();

    for summary in incoming {
        match positions.get(&summary.id) {
            Some(&index) => items[index] = summary,
            None => {
                positions.insert(summary.id, items.len());
                items.push(summary);
            }
        }
    }
}

/// Blank queries keep everything; otherwise matches on lowercased name or on
/// the decimal id.
pub fn filter_summaries(items: &[Summary], query: &str) -> Vec<Summary> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.id.to_string().contains(query))
        .cloned()
        .collect()
}
