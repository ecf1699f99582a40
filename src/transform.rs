// Pure mapping from raw PokeAPI responses to the Summary and Detail view models.

use crate::config::PokemonConfig;
use crate::error::{PokedexError, Result};
use crate::model::{Detail, StatBlock, Summary};
use crate::pokemon::{FlavorTextEntry, LocalizedName, PokemonApiResponse, SpeciesResponse};

/// Localized values resolved by the service. `None` keeps the source-language value.
#[derive(Debug, Default, Clone)]
pub struct Localization {
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
}

pub fn to_summary(data: &PokemonApiResponse) -> Result<Summary> {
    Ok(Summary {
        id: data.id,
        name: data.name.clone(),
        types: type_names(data),
        image: artwork_url(data)?,
    })
}

pub fn to_detail(
    data: &PokemonApiResponse,
    species: &SpeciesResponse,
    localization: &Localization,
    config: &PokemonConfig,
) -> Result<Detail> {
    Ok(Detail {
        id: data.id,
        name: localization
            .name
            .clone()
            .unwrap_or_else(|| data.name.clone()),
        types: localization
            .types
            .clone()
            .unwrap_or_else(|| type_names(data)),
        image: artwork_url(data)?,
        height: data.height,
        weight: data.weight,
        stats: stat_block(data),
        abilities: localization
            .abilities
            .clone()
            .unwrap_or_else(|| ability_names(data)),
        species: select_description(
            &species.flavor_text_entries,
            &config.language,
            &config.fallback_language,
        )
        .unwrap_or_else(|| config.missing_description.clone()),
    })
}

pub fn type_names(data: &PokemonApiResponse) -> Vec<String> {
    data.types.iter().map(|t| t.r#type.name.clone()).collect()
}

pub fn ability_names(data: &PokemonApiResponse) -> Vec<String> {
    data.abilities.iter().map(|a| a.ability.name.clone()).collect()
}

fn artwork_url(data: &PokemonApiResponse) -> Result<String> {
    data.sprites
        .other
        .official_artwork
        .front_default
        .clone()
        .ok_or_else(|| {
            PokedexError::DecodeError(format!(
                "Pokémon {} (ID: {}) has no official artwork",
                data.name, data.id
            ))
        })
}

pub fn stat_block(data: &PokemonApiResponse) -> StatBlock {
    let mut stats = StatBlock::default();
    for stat in &data.stats {
        let field = match stat.stat.name.as_str() {
            "hp" => &mut stats.hp,
            "attack" => &mut stats.attack,
            "defense" => &mut stats.defense,
            "special-attack" => &mut stats.special_attack,
            "special-defense" => &mut stats.special_defense,
            "speed" => &mut stats.speed,
            _ => continue,
        };
        *field = stat.base_stat;
    }
    stats
}

/// First entry in `language`, else first in `fallback_language`, with form
/// feeds and newlines turned into single spaces.
pub fn select_description(
    entries: &[FlavorTextEntry],
    language: &str,
    fallback_language: &str,
) -> Option<String> {
    entries
        .iter()
        .find(|entry| entry.language.name == language)
        .or_else(|| {
            entries
                .iter()
                .find(|entry| entry.language.name == fallback_language)
        })
        .map(|entry| entry.flavor_text.replace(['\u{c}', '\n'], " "))
}

pub fn localized_name(names: &[LocalizedName], language: &str) -> Option<String> {
    names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pokemon::NamedApiResource;

    fn resource(name: &str) -> NamedApiResource {
        NamedApiResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn entry(text: &str, language: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            flavor_text: text.to_string(),
            language: resource(language),
        }
    }

    fn bulbasaur() -> PokemonApiResponse {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ],
            "sprites": {"other": {"official-artwork": {"front_default": "https://img/1.png"}}},
            "stats": [
                {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
                {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}},
                {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack"}},
                {"base_stat": 99, "effort": 0, "stat": {"name": "accuracy"}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll"}, "is_hidden": true, "slot": 3}
            ],
            "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_keeps_slot_order() {
        let summary = to_summary(&bulbasaur()).unwrap();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "bulbasaur");
        assert_eq!(summary.types, vec!["grass", "poison"]);
        assert_eq!(summary.image, "https://img/1.png");
    }

    #[test]
    fn test_summary_fails_without_artwork() {
        let mut data = bulbasaur();
        data.sprites.other.official_artwork.front_default = None;
        assert!(matches!(
            to_summary(&data),
            Err(PokedexError::DecodeError(_))
        ));
    }

    #[test]
    fn test_single_special_attack_stat() {
        let mut data = bulbasaur();
        data.stats = serde_json::from_value(serde_json::json!([
            {"base_stat": 90, "stat": {"name": "special-attack"}}
        ]))
        .unwrap();

        let stats = stat_block(&data);
        assert_eq!(stats.special_attack, 90);
        assert_eq!(
            StatBlock {
                special_attack: 0,
                ..stats
            },
            StatBlock::default()
        );
    }

    #[test]
    fn test_unknown_stats_are_dropped() {
        let stats = stat_block(&bulbasaur());
        assert_eq!(stats.hp, 45);
        assert_eq!(stats.attack, 49);
        assert_eq!(stats.special_attack, 65);
        assert_eq!(stats.defense, 0);
        assert_eq!(stats.total(), 45 + 49 + 65);
    }

    #[test]
    fn test_description_prefers_target_language() {
        let entries = vec![
            entry("A strange seed.", "en"),
            entry("Una rara\nsemilla.", "es"),
            entry("Otra semilla.", "es"),
        ];
        assert_eq!(
            select_description(&entries, "es", "en").as_deref(),
            Some("Una rara semilla.")
        );
    }

    #[test]
    fn test_description_falls_back_to_source_language() {
        let entries = vec![
            entry("Une graine.", "fr"),
            entry("A strange\u{c}seed was\n\nplanted.", "en"),
        ];
        // each control character becomes one space, runs are not collapsed
        assert_eq!(
            select_description(&entries, "es", "en").as_deref(),
            Some("A strange seed was  planted.")
        );
    }

    #[test]
    fn test_description_placeholder() {
        let config = Config::default();
        let species = SpeciesResponse {
            flavor_text_entries: vec![entry("Une graine.", "fr")],
            names: Vec::new(),
        };
        let detail = to_detail(
            &bulbasaur(),
            &species,
            &Localization::default(),
            &config.pokemon,
        )
        .unwrap();
        assert_eq!(detail.species, config.pokemon.missing_description);
    }

    #[test]
    fn test_detail_uses_localization_when_present() {
        let config = Config::default();
        let species = SpeciesResponse {
            flavor_text_entries: Vec::new(),
            names: Vec::new(),
        };
        let localization = Localization {
            name: Some("Bulbasaur".to_string()),
            types: Some(vec!["Planta".to_string(), "Veneno".to_string()]),
            abilities: None,
        };

        let detail = to_detail(&bulbasaur(), &species, &localization, &config.pokemon).unwrap();
        assert_eq!(detail.name, "Bulbasaur");
        assert_eq!(detail.types, vec!["Planta", "Veneno"]);
        assert_eq!(detail.abilities, vec!["overgrow", "chlorophyll"]);
        assert_eq!(detail.height, 7);
        assert_eq!(detail.weight, 69);
    }

    #[test]
    fn test_localized_name_exact_match() {
        let names = vec![
            LocalizedName {
                name: "Espesura".to_string(),
                language: resource("es"),
            },
            LocalizedName {
                name: "Overgrow".to_string(),
                language: resource("en"),
            },
        ];
        assert_eq!(localized_name(&names, "es").as_deref(), Some("Espesura"));
        assert_eq!(localized_name(&names, "es-419"), None);
    }
}
