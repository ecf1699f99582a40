pub mod batch;
pub mod config;
pub mod display;
pub mod error;
pub mod list;
pub mod model;
pub mod pokemon;
pub mod service;
pub mod transform;

pub use config::*;
pub use error::{PokedexError, Result};
pub use list::{LoadPhase, PokemonList, PokemonSource};
pub use model::*;
pub use service::PokeApiService;
