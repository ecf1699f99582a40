// pokemon.rs
// Raw PokeAPI response shapes, deserialized as-is before the transform layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon?limit&offset`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

/// `GET /pokemon/{idOrName}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonApiResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<PokemonType>,
    pub sprites: Sprites,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<PokemonAbility>,
    pub species: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonType {
    pub slot: u32,
    pub r#type: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
    pub ability: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Sprites {
    pub other: OtherSprites,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OfficialArtwork {
    pub front_default: Option<String>,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeciesResponse {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedApiResource,
}

/// `GET /type/{name}` and `GET /ability/{name}`; only the names are used.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NamesResponse {
    pub names: Vec<LocalizedName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_response() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let list: PokemonListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1302);
        assert!(list.previous.is_none());
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[1].name, "ivysaur");
    }

    #[test]
    fn test_list_response_without_results_is_rejected() {
        let json = r#"{"count": 0, "next": null, "previous": null}"#;
        assert!(serde_json::from_str::<PokemonListResponse>(json).is_err());
    }

    #[test]
    fn test_missing_artwork_path_is_rejected() {
        let json = r#"{
            "id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
            "types": [], "stats": [], "abilities": [],
            "sprites": {"other": {}},
            "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
        }"#;
        assert!(serde_json::from_str::<PokemonApiResponse>(json).is_err());
    }

    #[test]
    fn test_species_names_default_to_empty() {
        let json = r#"{"flavor_text_entries": []}"#;
        let species: SpeciesResponse = serde_json::from_str(json).unwrap();
        assert!(species.names.is_empty());
    }
}
